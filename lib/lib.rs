#![allow(clippy::collapsible_if)]
#![cfg_attr(test, recursion_limit = "1024")]

/// Monte-Carlo search trees.
pub mod mcts;
/// Reporting of the most promising lines of a search.
pub mod report;
/// Shogi domain types.
pub mod shogi;
/// Turn decisions.
pub mod turn;
/// USI protocol.
pub mod usi;
/// Assorted utilities.
pub mod util;
