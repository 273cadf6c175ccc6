use crate::mcts::{Node, WinRate};
use crate::report::{MultiPv, ReportError};
use crate::shogi::Move;
use arrayvec::ArrayVec;
use derive_more::with_trait::Constructor;
use std::cmp::Reverse;

/// A child of a node selected for reporting.
#[derive(Debug, Copy, Clone, PartialEq, Constructor)]
pub struct Ranked {
    index: usize,
    mv: Move,
    win_rate: WinRate,
}

impl Ranked {
    /// The index of the child in its parent.
    #[inline(always)]
    pub fn index(&self) -> usize {
        self.index
    }

    /// The move leading to the child.
    #[inline(always)]
    pub fn mv(&self) -> Move {
        self.mv
    }

    /// The mean value of the child.
    #[inline(always)]
    pub fn win_rate(&self) -> WinRate {
        self.win_rate
    }
}

/// The most visited children of a node, most visited first.
pub type Ranking = ArrayVec<Ranked, { MultiPv::MAX as usize }>;

/// Selects up to `width` visited children of `node`, by descending visit count.
///
/// Children with equal visit counts keep their relative order, and children
/// that were never visited are never selected.
pub fn rank(node: &Node, width: MultiPv) -> Result<Ranking, ReportError> {
    if !node.is_expanded() {
        return Err(ReportError::UnexpandedRoot);
    } else if !node.is_well_formed() {
        return Err(ReportError::MalformedTree);
    }

    let mut order = Vec::from_iter(0..node.len());
    order.sort_by_key(|&idx| Reverse(node.visits(idx).unwrap_or_default()));

    let mut ranking = Ranking::new();
    for idx in order.into_iter().take(width.get()) {
        let (Some(mv), Some(win_rate)) = (node.child_move(idx), node.win_rate(idx)) else {
            break;
        };

        ranking.push(Ranked::new(idx, mv, win_rate));
    }

    Ok(ranking)
}
