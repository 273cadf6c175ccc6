use derive_more::with_trait::{Display, Error};
use std::fmt::{self, Formatter, Write};
use std::str::FromStr;

/// A square on the shogi board.
///
/// Files are numbered `1..=9` from right to left as seen by the first player,
/// ranks are lettered `a..=i` from top to bottom, which is how USI writes them.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[cfg_attr(feature = "dump", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "dump", serde(into = "String", try_from = "String"))]
pub struct Square(#[cfg_attr(test, strategy(0..Self::COUNT))] u8);

impl Square {
    /// The number of squares on the board.
    pub const COUNT: u8 = 81;

    /// Constructs a [`Square`] from its file and rank, both in `1..=9`.
    #[inline(always)]
    pub const fn new(file: u8, rank: u8) -> Option<Self> {
        if file >= 1 && file <= 9 && rank >= 1 && rank <= 9 {
            Some(Square((file - 1) * 9 + rank - 1))
        } else {
            None
        }
    }

    /// This square's file, in `1..=9`.
    #[inline(always)]
    pub const fn file(self) -> u8 {
        self.0 / 9 + 1
    }

    /// This square's rank, in `1..=9`.
    #[inline(always)]
    pub const fn rank(self) -> u8 {
        self.0 % 9 + 1
    }
}

impl Display for Square {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_char(char::from(b'0' + self.file()))?;
        f.write_char(char::from(b'a' + self.rank() - 1))
    }
}

/// The reason why parsing [`Square`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display("failed to parse square")]
pub struct ParseSquareError;

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.as_bytes() {
            &[f @ b'1'..=b'9', r @ b'a'..=b'i'] => {
                Square::new(f - b'0', r - b'a' + 1).ok_or(ParseSquareError)
            }
            _ => Err(ParseSquareError),
        }
    }
}

impl From<Square> for String {
    #[inline(always)]
    fn from(sq: Square) -> Self {
        sq.to_string()
    }
}

impl TryFrom<String> for Square {
    type Error = ParseSquareError;

    #[inline(always)]
    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn new_constructs_square_from_pair_of_file_and_rank(sq: Square) {
        assert_eq!(Square::new(sq.file(), sq.rank()), Some(sq));
    }

    #[proptest]
    fn new_rejects_coordinates_off_the_board(
        #[filter(!(1..=9).contains(&#f) || !(1..=9).contains(&#r))] f: u8,
        r: u8,
    ) {
        assert_eq!(Square::new(f, r), None);
    }

    #[test]
    fn squares_are_printed_in_usi_notation() {
        assert_eq!(Square::new(7, 7).map(|sq| sq.to_string()), Some("7g".into()));
        assert_eq!(Square::new(1, 1).map(|sq| sq.to_string()), Some("1a".into()));
        assert_eq!(Square::new(9, 9).map(|sq| sq.to_string()), Some("9i".into()));
    }

    #[proptest]
    fn parsing_printed_square_is_an_identity(sq: Square) {
        assert_eq!(sq.to_string().parse(), Ok(sq));
    }

    #[proptest]
    fn parsing_square_fails_if_file_invalid(#[filter(!('1'..='9').contains(&#c))] c: char) {
        assert_eq!(format!("{c}e").parse::<Square>(), Err(ParseSquareError));
    }

    #[proptest]
    fn parsing_square_fails_if_rank_invalid(#[filter(!('a'..='i').contains(&#c))] c: char) {
        assert_eq!(format!("5{c}").parse::<Square>(), Err(ParseSquareError));
    }

    #[proptest]
    fn parsing_square_fails_if_length_not_two(#[filter(#s.len() != 2)] s: String) {
        assert_eq!(s.parse::<Square>().ok(), None);
    }
}
