use derive_more::with_trait::{Display, Error};

/// The reason why reporting on a search tree failed.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
pub enum ReportError {
    /// The node's legal moves are not known yet.
    #[display("the node was never expanded")]
    UnexpandedRoot,
    /// The search has not visited any move yet.
    #[display("no move was visited by the search")]
    NoVisitedMoves,
    /// The per-child statistics of some node are misaligned.
    #[display("the search tree is malformed")]
    MalformedTree,
}
