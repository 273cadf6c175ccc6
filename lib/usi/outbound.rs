use crate::report::Info;
use crate::shogi::Move;
use crate::turn::Decision;
use crate::usi::UsiOption;
use std::fmt::{self, Display, Formatter};

#[cfg(test)]
use proptest::{collection::vec, prelude::*};

#[derive(Debug, Clone, Eq, PartialEq)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum Outbound {
    UsiOk(#[cfg_attr(test, strategy(vec(any::<UsiOption>(), 0..4)))] Vec<UsiOption>),
    ReadyOk,
    Info(Info),
    MateInfo { plies: u8, pv: Move },
    BestMove(Decision),
}

impl Display for Outbound {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Outbound::BestMove(d) => write!(f, "bestmove {d}"),
            Outbound::ReadyOk => f.write_str("readyok"),
            Outbound::Info(info) => write!(
                f,
                "info multipv {} nps {} time {} nodes {} score cp {} pv {}",
                info.multipv(),
                info.nps(),
                info.time().as_millis(),
                info.nodes(),
                info.score(),
                info.pv()
            ),

            Outbound::MateInfo { plies, pv } => write!(f, "info score mate {plies} pv {pv}"),

            Outbound::UsiOk(options) => {
                writeln!(f, "id name Hayate {}", env!("CARGO_PKG_VERSION"))?;
                writeln!(f, "id author Hayate developers")?;

                for option in options {
                    writeln!(f, "{option}")?;
                }

                f.write_str("usiok")
            }
        }
    }
}
