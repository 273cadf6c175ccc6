use crate::report::{Pv, Score};
use derive_more::with_trait::Constructor;
use std::time::Duration;

/// Progress about one candidate line of the search.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Constructor)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub struct Info {
    multipv: usize,
    nps: u64,
    time: Duration,
    nodes: u32,
    score: Score,
    pv: Pv,
}

impl Info {
    /// The 1-based rank of the line.
    #[inline(always)]
    pub fn multipv(&self) -> usize {
        self.multipv
    }

    /// The search speed in playouts per second.
    #[inline(always)]
    pub fn nps(&self) -> u64 {
        self.nps
    }

    /// The duration searched.
    #[inline(always)]
    pub fn time(&self) -> Duration {
        self.time
    }

    /// The number of visits to the root.
    #[inline(always)]
    pub fn nodes(&self) -> u32 {
        self.nodes
    }

    /// The score of the line.
    #[inline(always)]
    pub fn score(&self) -> Score {
        self.score
    }

    /// The principal variation.
    #[inline(always)]
    pub fn pv(&self) -> &Pv {
        &self.pv
    }
}
