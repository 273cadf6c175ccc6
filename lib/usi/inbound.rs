use crate::shogi::Move;
use crate::turn::Limits;
use crate::util::parsers::*;
use derive_more::with_trait::{Display, Error, From};
use nom::error::{Error as ParseError, ErrorKind};
use nom::{branch::*, bytes::complete::*, combinator::*, sequence::*, *};

#[cfg(test)]
use proptest::{collection::vec, option, prelude::*};

/// The outcome of a game, as announced by `gameover`.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum GameResult {
    #[display("win")]
    Win,
    #[display("lose")]
    Lose,
    #[display("draw")]
    Draw,
}

#[derive(Debug, Clone, Eq, PartialEq)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum Inbound {
    Usi,
    IsReady,
    SetOption {
        #[cfg_attr(test, strategy("[A-Za-z_]{1,16}"))]
        name: String,
        #[cfg_attr(test, strategy(option::of("[a-z0-9]{1,8}")))]
        value: Option<String>,
    },
    UsiNewGame,
    Position {
        #[cfg_attr(test, strategy(option::of("[1-9a-z/+]{1,20} [bw] [-A-Z0-9]{1,8} [1-9]")))]
        sfen: Option<String>,
        #[cfg_attr(test, strategy(vec(any::<Move>(), 0..8)))]
        moves: Vec<Move>,
    },
    Go(Limits),
    Stop,
    PonderHit,
    GameOver(GameResult),
    Quit,
}

#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
pub enum ParseUsiError<'s> {
    #[display("unrecognized sequence `{}`", _0.input)]
    Unrecognized(#[error(not(source))] ParseError<&'s str>),
    #[display("invalid move `{_0}`")]
    InvalidMove(#[error(not(source))] &'s str),
}

/// Parses USI commands sent by the GUI.
#[derive(Debug, Default)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub struct UsiParser;

impl UsiParser {
    pub fn parse<'s>(&mut self, s: &'s str) -> Result<Inbound, ParseUsiError<'s>> {
        let (args, cmd) = t(word).parse(s).finish()?;

        match (args, cmd) {
            (args, "position") => {
                let word4 = (word, t(word), t(word), word);
                let sfen = field("sfen", t(recognize(word4))).map(Some);
                let startpos = t(tag("startpos")).map(|_| None);
                let moves = opt(field("moves", rest));

                let mut position = terminated((alt((startpos, sfen)), moves), eof);
                let (_, (sfen, moves)) = position.parse(args).finish()?;

                let mut parsed = Vec::new();
                for m in moves.unwrap_or_default().split_ascii_whitespace() {
                    parsed.push(m.parse().map_err(|_| ParseUsiError::InvalidMove(m))?);
                }

                Ok(Inbound::Position {
                    sfen: sfen.map(|s: &str| s.trim().to_owned()),
                    moves: parsed,
                })
            }

            (args, "go") => {
                let ponder = t(tag("ponder"));
                let btime = field("btime", millis);
                let wtime = field("wtime", millis);
                let binc = field("binc", millis);
                let winc = field("winc", millis);
                let byoyomi = field("byoyomi", millis);
                let movetime = field("movetime", millis);
                let nodes = field("nodes", int::<u64>);
                let infinite = t(tag("infinite"));

                let params = (ponder, btime, wtime, binc, winc, byoyomi, movetime, nodes, infinite);
                let mut go = terminated(gather(params), eof);
                let (_, (ponder, btime, wtime, binc, winc, byoyomi, movetime, nodes, infinite)) =
                    go.parse(args).finish()?;

                Ok(Inbound::Go(Limits {
                    nodes,
                    movetime,
                    byoyomi,
                    btime,
                    wtime,
                    binc,
                    winc,
                    infinite: infinite.is_some(),
                    ponder: ponder.is_some(),
                }))
            }

            (args, "setoption") => {
                let name = field("name", until("value"));
                let value = opt(field("value", rest));

                let mut setoption = terminated((name, value), eof);
                let (_, (name, value)) = setoption.parse(args).finish()?;

                Ok(Inbound::SetOption {
                    name: name.to_owned(),
                    value: value.map(|v: &str| v.trim().to_owned()),
                })
            }

            (args, "gameover") => {
                let result = alt((
                    tag("win").map(|_| GameResult::Win),
                    tag("lose").map(|_| GameResult::Lose),
                    tag("draw").map(|_| GameResult::Draw),
                ));

                let mut gameover = terminated(t(result), eof);
                let (_, result) = gameover.parse(args).finish()?;
                Ok(Inbound::GameOver(result))
            }

            ("", "usi") => Ok(Inbound::Usi),
            ("", "isready") => Ok(Inbound::IsReady),
            ("", "usinewgame") => Ok(Inbound::UsiNewGame),
            ("", "stop") => Ok(Inbound::Stop),
            ("", "ponderhit") => Ok(Inbound::PonderHit),
            ("", "quit") => Ok(Inbound::Quit),

            _ => Err(ParseUsiError::Unrecognized(ParseError::new(s, ErrorKind::Tag))),
        }
    }
}
