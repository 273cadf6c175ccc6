use derive_more::with_trait::{Display, Error};
use std::num::ParseIntError;
use std::str::FromStr;

/// The number of candidate moves reported per turn.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[display("{_0}")]
pub struct MultiPv(#[cfg_attr(test, strategy(Self::MIN..=Self::MAX))] u8);

impl MultiPv {
    /// The narrowest width.
    pub const MIN: u8 = 1;

    /// The widest width.
    pub const MAX: u8 = 30;

    /// Constructs a [`MultiPv`] if `n` is within bounds.
    #[inline(always)]
    pub const fn new(n: u8) -> Option<Self> {
        if n >= Self::MIN && n <= Self::MAX {
            Some(MultiPv(n))
        } else {
            None
        }
    }

    /// Constructs a [`MultiPv`], saturating `n` into bounds.
    #[inline(always)]
    pub fn saturate(n: i64) -> Self {
        MultiPv(n.clamp(Self::MIN.into(), Self::MAX.into()) as u8)
    }

    /// The narrowest [`MultiPv`].
    #[inline(always)]
    pub const fn lower() -> Self {
        MultiPv(Self::MIN)
    }

    /// The widest [`MultiPv`].
    #[inline(always)]
    pub const fn upper() -> Self {
        MultiPv(Self::MAX)
    }

    /// The width as a count.
    #[inline(always)]
    pub const fn get(self) -> usize {
        self.0 as usize
    }
}

impl Default for MultiPv {
    #[inline(always)]
    fn default() -> Self {
        MultiPv(8)
    }
}

/// The reason why parsing [`MultiPv`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
pub enum ParseMultiPvError {
    #[display("expected an integer")]
    NotAnInteger(ParseIntError),
    #[display("expected an integer in the range [{}, {}]", MultiPv::MIN, MultiPv::MAX)]
    OutOfRange,
}

impl FromStr for MultiPv {
    type Err = ParseMultiPvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let n = s.trim().parse::<i64>().map_err(ParseMultiPvError::NotAnInteger)?;
        u8::try_from(n)
            .ok()
            .and_then(MultiPv::new)
            .ok_or(ParseMultiPvError::OutOfRange)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[test]
    fn default_width_is_eight() {
        assert_eq!(MultiPv::default().get(), 8);
    }

    #[proptest]
    fn saturate_clamps_into_bounds(n: i64) {
        let w = MultiPv::saturate(n);
        assert!((MultiPv::lower()..=MultiPv::upper()).contains(&w));
        if (1..=30).contains(&n) {
            assert_eq!(w.get() as i64, n);
        }
    }

    #[proptest]
    fn parsing_printed_width_is_an_identity(w: MultiPv) {
        assert_eq!(w.to_string().parse(), Ok(w));
    }

    #[proptest]
    fn parsing_out_of_range_width_fails(#[filter(!(1..=30).contains(&#n))] n: i64) {
        assert_eq!(
            n.to_string().parse::<MultiPv>(),
            Err(ParseMultiPvError::OutOfRange)
        );
    }

    #[proptest]
    fn parsing_non_integer_fails(#[filter(#s.trim().parse::<i64>().is_err())] s: String) {
        assert!(matches!(
            s.parse::<MultiPv>(),
            Err(ParseMultiPvError::NotAnInteger(_))
        ));
    }
}
