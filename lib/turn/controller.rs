use crate::mcts::{Node, WinRate};
use crate::report::{Candidate, MultiPv, Reporter};
use crate::shogi::Move;
use crate::turn::{Decision, Engine, Limits, OptionError, Options, Position, TurnError};
use crate::usi::{Outbound, UsiOption};
use futures::{Sink, SinkExt};
use log::{Level, debug, log_enabled, warn};
use std::time::{Duration, Instant};

/// Decides what to do on each turn and reports the search as it goes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub struct Controller {
    multipv: MultiPv,
    resign_threshold: WinRate,
    mate_search: bool,
    debug: bool,
}

impl Default for Controller {
    fn default() -> Self {
        Controller {
            multipv: MultiPv::default(),
            resign_threshold: WinRate::new(0.01),
            mate_search: false,
            debug: false,
        }
    }
}

impl Controller {
    /// The number of candidate lines reported.
    #[inline(always)]
    pub fn multipv(&self) -> MultiPv {
        self.multipv
    }

    #[inline(always)]
    pub fn set_multipv(&mut self, multipv: MultiPv) {
        self.multipv = multipv;
    }

    /// The win rate below which the engine resigns.
    #[inline(always)]
    pub fn resign_threshold(&self) -> WinRate {
        self.resign_threshold
    }

    #[inline(always)]
    pub fn set_resign_threshold(&mut self, threshold: WinRate) {
        self.resign_threshold = threshold;
    }

    /// Whether mating moves are looked for before searching.
    #[inline(always)]
    pub fn mate_search(&self) -> bool {
        self.mate_search
    }

    #[inline(always)]
    pub fn set_mate_search(&mut self, enabled: bool) {
        self.mate_search = enabled;
    }

    /// Whether the statistics of every root move are logged after searching.
    #[inline(always)]
    pub fn debug(&self) -> bool {
        self.debug
    }

    #[inline(always)]
    pub fn set_debug(&mut self, enabled: bool) {
        self.debug = enabled;
    }

    /// The options understood by the controller itself.
    pub fn options(&self) -> Vec<UsiOption> {
        vec![
            UsiOption::spin(
                "MultiPV",
                MultiPv::default().get() as i64,
                MultiPv::lower().get() as i64,
                MultiPv::upper().get() as i64,
            ),
            UsiOption::spin("Resign_Threshold", 10, 0, 1000),
            UsiOption::check("Mate_Search", false),
            UsiOption::check("Debug", false),
        ]
    }

    /// Sets the option `name`, delegating to `base` the ones it doesn't know.
    pub fn set_option<B: Options + ?Sized>(
        &mut self,
        base: &mut B,
        name: &str,
        value: Option<&str>,
    ) -> Result<(), OptionError> {
        let invalid = || OptionError::InvalidValue {
            name: name.to_owned(),
            value: value.map(str::to_owned),
        };

        match name.to_ascii_lowercase().as_str() {
            "multipv" => {
                let n: i64 = value.ok_or_else(invalid)?.trim().parse().map_err(|_| invalid())?;
                let multipv = MultiPv::saturate(n);
                if multipv.get() as i64 != n {
                    warn!("clamped MultiPV {n} to {}", multipv.get());
                }

                self.multipv = multipv;
            }

            "resign_threshold" => {
                let n: i64 = value.ok_or_else(invalid)?.trim().parse().map_err(|_| invalid())?;
                let per_mille = n.clamp(0, 1000);
                if per_mille != n {
                    warn!("clamped Resign_Threshold {n} to {per_mille}");
                }

                self.resign_threshold = WinRate::new(per_mille as f64 / 1000.);
            }

            "mate_search" => self.mate_search = check(value).ok_or_else(invalid)?,
            "debug" => self.debug = check(value).ok_or_else(invalid)?,
            _ => base.set_option(name, value)?,
        }

        Ok(())
    }

    /// Plays one turn of `engine` within `limits`.
    ///
    /// Progress is sent to `output` while the turn is still running, the
    /// decision itself is left to the caller to send.
    pub async fn think<E, O>(
        &self,
        engine: &mut E,
        limits: &Limits,
        output: &mut O,
    ) -> Result<Decision, TurnError<O::Error>>
    where
        E: Engine + ?Sized,
        O: Sink<Outbound> + Unpin,
    {
        let timer = Instant::now();

        if engine.position().is_game_over() {
            debug!("no legal moves left");
            return Ok(Decision::Resign);
        }

        if engine.position().is_nyugyoku() {
            debug!("declaring entering king");
            return Ok(Decision::Win);
        }

        if self.mate_search {
            if let Some((plies, best)) = self.mate(engine.position(), engine.root()) {
                debug!("found mate in {plies}");
                let info = Outbound::MateInfo { plies, pv: best };
                output.send(info).await.map_err(TurnError::Output)?;
                return Ok(Decision::Move { best, ponder: None });
            }
        }

        if !engine.root().is_expanded() {
            engine.expand_root()?;
        }

        if !limits.is_capped() && engine.root().len() == 1 {
            let root = engine.root();
            debug!("single legal move");

            return match (root.child_move(0), root.visits(0)) {
                (Some(best), Some(0)) => Ok(Decision::Move { best, ponder: None }),
                _ => {
                    let candidates = self.report(root, timer.elapsed(), 0, output).await?;
                    Ok(decide(&candidates))
                }
            };
        }

        if engine.root().policy.is_none() {
            engine.evaluate_root()?;
        }

        engine.search(limits)?;

        let root = engine.root();
        let playouts = engine.playouts();
        let candidates = self.report(root, timer.elapsed(), playouts, output).await?;

        if self.debug && log_enabled!(Level::Debug) {
            dump(root);
        }

        match candidates.first() {
            Some(best) if best.win_rate() < self.resign_threshold => {
                debug!("resigning at win rate {}", best.win_rate());
                Ok(Decision::Resign)
            }

            _ => Ok(decide(&candidates)),
        }
    }

    fn mate<P: Position + ?Sized>(&self, pos: &P, root: &Node) -> Option<(u8, Move)> {
        if root.is_won() {
            if let Some(m) = pos.mate_move(3) {
                return Some((3, m));
            }
        }

        if pos.is_check() {
            None
        } else {
            pos.mate_move_in_1ply().map(|m| (1, m))
        }
    }

    async fn report<O>(
        &self,
        root: &Node,
        time: Duration,
        playouts: u64,
        output: &mut O,
    ) -> Result<Vec<Candidate>, TurnError<O::Error>>
    where
        O: Sink<Outbound> + Unpin,
    {
        let reporter = Reporter::new(self.multipv, time, playouts);
        let mut candidates = Vec::with_capacity(self.multipv.get());

        for line in reporter.report(root)? {
            let (candidate, info) = line?;
            output.send(Outbound::Info(info)).await.map_err(TurnError::Output)?;
            candidates.push(candidate);
        }

        Ok(candidates)
    }
}

fn check(value: Option<&str>) -> Option<bool> {
    match value?.trim().to_ascii_lowercase().as_str() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

fn decide(candidates: &[Candidate]) -> Decision {
    match candidates.first() {
        None => Decision::Resign,
        Some(best) => Decision::Move {
            best: best.mv(),
            ponder: best.ponder(),
        },
    }
}

fn dump(root: &Node) {
    for (idx, mv) in root.child_moves().unwrap_or_default().iter().enumerate() {
        let visits = root.visits(idx).unwrap_or_default();
        let prior = root.prior(idx).unwrap_or_default();
        let win_rate = root.win_rate(idx).map_or(0., |w| w.get());
        let mv = mv.to_string();
        debug!("{idx:>3}: {mv:<6} visits {visits:>6} prior {prior:.5} win rate {win_rate:.5}");
    }
}
