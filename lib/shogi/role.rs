use derive_more::with_trait::{Display, Error};
use std::str::FromStr;

/// A kind of piece that can be dropped from hand.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[repr(u8)]
pub enum Role {
    #[display("P")]
    Pawn,
    #[display("L")]
    Lance,
    #[display("N")]
    Knight,
    #[display("S")]
    Silver,
    #[display("G")]
    Gold,
    #[display("B")]
    Bishop,
    #[display("R")]
    Rook,
}

/// The reason why parsing [`Role`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display("failed to parse piece role")]
pub struct ParseRoleError;

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "P" => Ok(Role::Pawn),
            "L" => Ok(Role::Lance),
            "N" => Ok(Role::Knight),
            "S" => Ok(Role::Silver),
            "G" => Ok(Role::Gold),
            "B" => Ok(Role::Bishop),
            "R" => Ok(Role::Rook),
            _ => Err(ParseRoleError),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn parsing_printed_role_is_an_identity(r: Role) {
        assert_eq!(r.to_string().parse(), Ok(r));
    }

    #[proptest]
    fn parsing_role_fails_for_unknown_letters(
        #[filter(!["P", "L", "N", "S", "G", "B", "R"].contains(&#s.as_str()))] s: String,
    ) {
        assert_eq!(s.parse::<Role>(), Err(ParseRoleError));
    }
}
