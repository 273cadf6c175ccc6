use crate::mcts::WinRate;
use crate::report::{Pv, Score};
use crate::shogi::Move;
use derive_more::with_trait::Constructor;

/// A candidate move, as reported to the user.
#[derive(Debug, Clone, PartialEq, Constructor)]
pub struct Candidate {
    rank: usize,
    mv: Move,
    win_rate: WinRate,
    score: Score,
    pv: Pv,
}

impl Candidate {
    /// The 1-based rank among all candidates.
    #[inline(always)]
    pub fn rank(&self) -> usize {
        self.rank
    }

    /// The candidate move.
    #[inline(always)]
    pub fn mv(&self) -> Move {
        self.mv
    }

    /// The mean value of the candidate move.
    #[inline(always)]
    pub fn win_rate(&self) -> WinRate {
        self.win_rate
    }

    /// The score of the candidate move.
    #[inline(always)]
    pub fn score(&self) -> Score {
        self.score
    }

    /// The principal variation starting with the candidate move.
    #[inline(always)]
    pub fn pv(&self) -> &Pv {
        &self.pv
    }

    /// The expected reply to the candidate move.
    #[inline(always)]
    pub fn ponder(&self) -> Option<Move> {
        self.pv.ponder()
    }
}
