use anyhow::{Context, Error as Failure};
use clap::{Parser, Subcommand};
use futures::{channel::mpsc::unbounded, executor::block_on, prelude::*, sink::unfold as sink};
use hayate::mcts::{Node, WinRate};
use hayate::report::MultiPv;
use hayate::shogi::Move;
use hayate::turn::{Controller, Decision, Limits, Recorded, Replay, TurnError};
use hayate::usi::{Outbound, Usi, UsiParser};
use log::{error, warn};
use ron::{Options, ser::PrettyConfig};
use std::fs::{self, File};
use std::future::ready;
use std::io::{prelude::*, stdin, stdout};
use std::path::{Path, PathBuf};
use std::thread;

#[derive(Debug, Parser)]
#[clap(name = "Hayate", version, author)]
#[clap(help_template = "
{name} v{version} by {author}

{name} reports the most promising lines of Monte-Carlo shogi searches.
It is released as free software under the terms of the GNU GPLv3 license.
")]
struct Cli {
    #[clap(subcommand)]
    action: Action,
}

#[derive(Debug, Subcommand)]
enum Action {
    /// Serves the USI protocol, answering every search with a recorded tree.
    Usi {
        /// The recorded search tree, in RON.
        tree: PathBuf,
    },

    /// Plays one turn on a recorded tree and prints what would be sent to the GUI.
    Report {
        /// The recorded search tree, in RON.
        tree: PathBuf,

        /// The number of candidate lines.
        #[clap(long, default_value_t = MultiPv::default())]
        multipv: MultiPv,

        /// The win rate below which to resign, in per mille.
        #[clap(long, default_value_t = 10, value_parser = clap::value_parser!(u16).range(0..=1000))]
        resign_threshold: u16,

        /// Look for mating moves before reporting.
        #[clap(long)]
        mate_search: bool,
    },

    /// Writes a small example tree.
    DumpExample {
        /// Where to write the tree.
        path: PathBuf,
    },
}

/// Recorded trees nest a few levels per ply, deeper than RON allows by default.
fn options() -> Options {
    Options::default().without_recursion_limit()
}

fn load(path: &Path) -> Result<Node, Failure> {
    let file = File::open(path).with_context(|| format!("failed to open `{}`", path.display()))?;
    options().from_reader(file).with_context(|| format!("failed to parse `{}`", path.display()))
}

fn example() -> Result<Node, Failure> {
    let [a, b, c, d, e]: [Move; 5] = [
        "7g7f".parse()?,
        "2g2f".parse()?,
        "5i6h".parse()?,
        "3c3d".parse()?,
        "8c8d".parse()?,
    ];

    let reply = Node::expanded([d, e])
        .with_move_count(70)
        .with_visits(0, 50, 26.)
        .with_visits(1, 20, 9.);

    let root = Node::expanded([a, b, c])
        .with_move_count(120)
        .with_value(0.52)
        .with_policy(vec![0.45, 0.4, 0.15])
        .with_visits(0, 71, 38.)
        .with_visits(1, 40, 20.5)
        .with_visits(2, 9, 3.1)
        .with_child(0, reply);

    Ok(root)
}

fn usi(tree: &Path) -> Result<(), Failure> {
    let engine = Replay::new(Recorded::default(), load(tree)?);
    let (tx, input) = unbounded();

    thread::spawn(move || {
        let mut lines = stdin().lock().lines();
        while let Some(Ok(line)) = lines.next() {
            match line.trim() {
                "" => continue,
                trimmed => match UsiParser.parse(trimmed) {
                    Err(e) => warn!("ignored usi command, {e}"),
                    Ok(cmd) => match tx.unbounded_send(cmd) {
                        Ok(()) => continue,
                        Err(_) => break,
                    },
                },
            }
        }
    });

    let mut stdout = stdout().lock();
    let output = sink((), move |_, o: Outbound| ready(writeln!(stdout, "{o}")));
    Ok(block_on(Usi::new(input, output, engine).run())?)
}

fn report(tree: &Path, controller: &Controller) -> Result<(), Failure> {
    let mut engine = Replay::new(Recorded::default(), load(tree)?);

    let mut stdout = stdout().lock();
    let mut output = sink((), move |_, o: Outbound| ready(writeln!(stdout, "{o}")));

    let limits = Limits::default();
    let decision = match block_on(controller.think(&mut engine, &limits, &mut output)) {
        Ok(decision) => decision,
        Err(TurnError::Output(e)) => return Err(e.into()),
        Err(e) => {
            error!("resigning, {e}");
            Decision::Resign
        }
    };

    block_on(output.send(Outbound::BestMove(decision)))?;
    Ok(())
}

fn main() -> Result<(), Failure> {
    env_logger::init();

    match Cli::parse().action {
        Action::Usi { tree } => usi(&tree),

        Action::Report {
            tree,
            multipv,
            resign_threshold,
            mate_search,
        } => {
            let mut controller = Controller::default();
            controller.set_multipv(multipv);
            controller.set_resign_threshold(WinRate::new(f64::from(resign_threshold) / 1000.));
            controller.set_mate_search(mate_search);
            report(&tree, &controller)
        }

        Action::DumpExample { path } => {
            let config = PrettyConfig::default().compact_arrays(true);
            let content = options().to_string_pretty(&example()?, config)?;
            fs::write(&path, content)
                .with_context(|| format!("failed to write `{}`", path.display()))
        }
    }
}
