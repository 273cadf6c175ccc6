use derive_more::with_trait::Display;

/// Value backed up to a node whose position is a proven win for the side to move.
pub const VALUE_WIN: f32 = 10000.0;

/// The fraction of simulated outcomes that favor the side to move.
///
/// Always in `[0, 1]`, constructing from anything else saturates, and `NaN`
/// is taken to mean that nothing is known, i.e. an even position.
#[derive(Debug, Display, Default, Copy, Clone, PartialEq, PartialOrd)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[display("{_0}")]
pub struct WinRate(#[cfg_attr(test, strategy(0f64..=1f64))] f64);

impl WinRate {
    /// A certain loss.
    pub const LOSS: Self = WinRate(0.0);

    /// An even position.
    pub const EVEN: Self = WinRate(0.5);

    /// A certain win.
    pub const WIN: Self = WinRate(1.0);

    /// Constructs a [`WinRate`] from a probability.
    #[inline(always)]
    pub fn new(p: f64) -> Self {
        if p.is_nan() {
            Self::EVEN
        } else {
            WinRate(p.clamp(0.0, 1.0))
        }
    }

    /// The mean of `count` accumulated outcomes, or `None` if nothing was accumulated.
    #[inline(always)]
    pub fn mean(sum: f32, count: u32) -> Option<Self> {
        if count > 0 {
            Some(Self::new(f64::from(sum) / f64::from(count)))
        } else {
            None
        }
    }

    /// The probability.
    #[inline(always)]
    pub fn get(self) -> f64 {
        self.0
    }

    /// The win rate of the opponent.
    #[inline(always)]
    pub fn flip(self) -> Self {
        WinRate(1.0 - self.0)
    }
}
