use crate::mcts::WinRate;
use derive_more::with_trait::Display;
use std::ops::Neg;

/// An evaluation in conventional engine units.
///
/// Derived from a [`WinRate`] through the inverse of a logistic function with
/// slope `1 / SCALE`, and saturating at `±30000`.
#[derive(Debug, Display, Default, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[display("{_0}")]
pub struct Score(#[cfg_attr(test, strategy(-30000i32..=30000))] i32);

impl Score {
    /// The score of a certain loss.
    pub const MIN: Self = Score(-30000);

    /// The score of a certain win.
    pub const MAX: Self = Score(30000);

    /// The steepness of the mapping between probabilities and scores.
    pub const SCALE: f64 = 600.0;

    /// Constructs a [`Score`], saturating into the valid range.
    #[inline(always)]
    pub fn new(s: i32) -> Self {
        Score(s.clamp(Self::MIN.0, Self::MAX.0))
    }

    /// The integer score.
    #[inline(always)]
    pub const fn get(self) -> i32 {
        self.0
    }

    /// Converts a [`WinRate`] into a [`Score`].
    pub fn from_win_rate(w: WinRate) -> Self {
        let p = w.get();
        if p >= 1.0 {
            Self::MAX
        } else if p <= 0.0 {
            Self::MIN
        } else if p > 0.5 {
            // 1 - p is exact above one half, so scores are antisymmetric around it.
            -Self::from_win_rate(w.flip())
        } else {
            let logit = p.ln() - (-p).ln_1p();
            Score::new((logit * Self::SCALE).round() as i32)
        }
    }
}

impl From<WinRate> for Score {
    #[inline(always)]
    fn from(w: WinRate) -> Self {
        Score::from_win_rate(w)
    }
}

impl Neg for Score {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self::Output {
        Score(-self.0)
    }
}
