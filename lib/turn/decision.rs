use crate::shogi::Move;
use derive_more::with_trait::Display;

/// The final answer of a turn.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum Decision {
    #[display("resign")]
    Resign,
    /// Declares a win by entering king.
    #[display("win")]
    Win,
    #[display("{best}{}", ponder.map(|p| format!(" ponder {p}")).unwrap_or_default())]
    Move { best: Move, ponder: Option<Move> },
}
