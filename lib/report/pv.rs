use crate::mcts::Node;
use crate::report::ReportError;
use crate::shogi::Move;
use derive_more::with_trait::{Deref, IntoIterator};
use std::fmt::{self, Display, Formatter, Write};

#[cfg(test)]
use proptest::{collection::vec, prelude::*};

/// The [principal variation].
///
/// [principal variation]: https://www.chessprogramming.org/Principal_Variation
#[derive(Debug, Clone, Eq, PartialEq, Hash, Deref, IntoIterator)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub struct Pv(
    #[into_iterator(owned, ref)]
    #[cfg_attr(test, strategy(vec(any::<Move>(), 1..8)))]
    Vec<Move>,
);

impl Pv {
    /// The longest line ever extracted, the longest game allowed by tournament rules.
    pub const MAX_PLIES: usize = 512;

    /// The first [`Move`].
    #[inline(always)]
    pub fn head(&self) -> Option<Move> {
        self.0.first().copied()
    }

    /// The expected reply to the first [`Move`].
    #[inline(always)]
    pub fn ponder(&self) -> Option<Move> {
        self.0.get(1).copied()
    }

    /// Extracts the principal variation through the child at `start` of `node`.
    ///
    /// Descends greedily into the most visited child at every ply, stopping
    /// wherever the tree has not been explored enough to be trusted: at a child
    /// that was not materialized, was never expanded, or was never visited.
    pub fn extract(node: &Node, start: usize) -> Result<Self, ReportError> {
        if !node.is_expanded() {
            return Err(ReportError::UnexpandedRoot);
        } else if !node.is_well_formed() {
            return Err(ReportError::MalformedTree);
        }

        let head = node.child_move(start).ok_or(ReportError::MalformedTree)?;
        let mut moves = vec![head];

        let (mut node, mut idx) = (node, start);
        while moves.len() < Self::MAX_PLIES && node.has_children() {
            let Some(child) = node.child(idx) else {
                break;
            };

            if !child.is_expanded() || child.move_count == 0 {
                break;
            } else if !child.is_well_formed() {
                return Err(ReportError::MalformedTree);
            }

            let Some((best, mv)) = child
                .most_visited()
                .and_then(|i| Some((i, child.child_move(i)?)))
            else {
                break;
            };

            moves.push(mv);
            (node, idx) = (child, best);
        }

        Ok(Pv(moves))
    }
}

impl Display for Pv {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut moves = self.iter();
        let Some(head) = moves.next() else {
            return Ok(());
        };

        Display::fmt(head, f)?;

        for m in moves {
            f.write_char(' ')?;
            Display::fmt(m, f)?;
        }

        Ok(())
    }
}
