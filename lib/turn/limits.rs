use std::time::Duration;

/// The budget for one turn, as requested by `go`.
#[derive(Debug, Default, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub struct Limits {
    /// The maximum number of playouts, if capped.
    pub nodes: Option<u64>,
    /// The fixed time to spend on this move.
    pub movetime: Option<Duration>,
    /// The time granted per move once the main time runs out.
    pub byoyomi: Option<Duration>,
    pub btime: Option<Duration>,
    pub wtime: Option<Duration>,
    pub binc: Option<Duration>,
    pub winc: Option<Duration>,
    /// Search until told to stop.
    pub infinite: bool,
    /// Search on the opponent's time.
    pub ponder: bool,
}

impl Limits {
    /// Whether the search is capped by a playout count.
    #[inline(always)]
    pub fn is_capped(&self) -> bool {
        self.nodes.is_some()
    }

    /// Whether the final decision must be withheld until `stop` or `ponderhit`.
    #[inline(always)]
    pub fn is_open_ended(&self) -> bool {
        self.infinite || self.ponder
    }
}
