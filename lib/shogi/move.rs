use crate::shogi::{Role, Square};
use derive_more::with_trait::{Display, Error};
use nom::{IResult, Parser, branch::alt, bytes::complete::*, combinator::*};
use std::fmt::{self, Formatter};
use std::str::FromStr;

/// A shogi move, as written in USI notation.
///
/// Legality is never checked here, a [`Move`] is only a well formed token.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[cfg_attr(feature = "dump", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "dump", serde(into = "String", try_from = "String"))]
pub enum Move {
    /// A piece moves on the board, optionally promoting.
    Board {
        whence: Square,
        whither: Square,
        promotion: bool,
    },
    /// A piece is dropped from hand.
    Drop { role: Role, whither: Square },
}

impl Move {
    /// Constructs a move on the board.
    #[inline(always)]
    pub const fn board(whence: Square, whither: Square, promotion: bool) -> Self {
        Move::Board {
            whence,
            whither,
            promotion,
        }
    }

    /// Constructs a drop.
    #[inline(always)]
    pub const fn drop(role: Role, whither: Square) -> Self {
        Move::Drop { role, whither }
    }

    /// The destination [`Square`].
    #[inline(always)]
    pub const fn whither(self) -> Square {
        match self {
            Move::Board { whither, .. } | Move::Drop { whither, .. } => whither,
        }
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Move::Board {
                whence,
                whither,
                promotion,
            } => {
                write!(f, "{whence}{whither}")?;
                if *promotion {
                    f.write_str("+")?;
                }

                Ok(())
            }

            Move::Drop { role, whither } => write!(f, "{role}*{whither}"),
        }
    }
}

/// The reason why parsing [`Move`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display("failed to parse move")]
pub struct ParseMoveError;

fn square(input: &str) -> IResult<&str, Square> {
    take(2usize).map_res(Square::from_str).parse(input)
}

fn role(input: &str) -> IResult<&str, Role> {
    take(1usize).map_res(Role::from_str).parse(input)
}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let drop = (role, tag("*"), square).map(|(r, _, sq)| Move::drop(r, sq));
        let board = (square, square, opt(tag("+"))).map(|(a, b, p)| Move::board(a, b, p.is_some()));
        let mut token = all_consuming(alt((drop, board)));

        match token.parse(s) {
            Ok((_, m)) => Ok(m),
            Err(_) => Err(ParseMoveError),
        }
    }
}

impl From<Move> for String {
    #[inline(always)]
    fn from(m: Move) -> Self {
        m.to_string()
    }
}

impl TryFrom<String> for Move {
    type Error = ParseMoveError;

    #[inline(always)]
    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[test]
    fn moves_are_printed_in_usi_notation() {
        let sq = |s: &str| s.parse::<Square>().unwrap();
        assert_eq!(Move::board(sq("7g"), sq("7f"), false).to_string(), "7g7f");
        assert_eq!(Move::board(sq("8h"), sq("2b"), true).to_string(), "8h2b+");
        assert_eq!(Move::drop(Role::Pawn, sq("5e")).to_string(), "P*5e");
    }

    #[proptest]
    fn parsing_printed_move_is_an_identity(m: Move) {
        assert_eq!(m.to_string().parse(), Ok(m));
    }

    #[proptest]
    fn whither_is_the_last_square_printed(m: Move) {
        let s = m.to_string();
        let s = s.trim_end_matches('+');
        assert_eq!(s[s.len() - 2..].parse(), Ok(m.whither()));
    }

    #[proptest]
    fn parsing_move_with_trailing_garbage_fails(m: Move, #[strategy("[a-z]{1,3}")] s: String) {
        assert_eq!(format!("{m}{s}").parse::<Move>(), Err(ParseMoveError));
    }

    #[test]
    fn parsing_malformed_moves_fails() {
        for s in ["", "7g", "7g7", "7g7f++", "0g7f", "7j7f", "p*5e", "P5e", "+*5e", "resign"] {
            assert_eq!(s.parse::<Move>(), Err(ParseMoveError), "{s}");
        }
    }
}
