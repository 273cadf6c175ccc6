use crate::mcts::{VALUE_WIN, WinRate};
use crate::shogi::Move;

/// A node of a Monte-Carlo search tree.
///
/// The tree is built and updated by the search engine, everything else only
/// ever reads it. Per-child statistics are stored in parallel vectors indexed
/// the same way as [`Node::child_move`], children are materialized lazily and
/// a materialized child may itself still be unexpanded.
#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "dump", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "dump", serde(default))]
pub struct Node {
    /// Total number of visits to this node.
    pub move_count: u32,
    /// The node's own value estimate.
    pub value: Option<f32>,
    /// Prior probability of each child.
    pub policy: Option<Vec<f32>>,
    /// Legal moves from this node, `None` until the node is expanded.
    pub child_move: Option<Vec<Move>>,
    /// Visits to each child.
    pub child_move_count: Vec<u32>,
    /// Sum of the values backed up through each child.
    pub child_sum_value: Vec<f32>,
    /// Child subtrees, `None` until any of them is materialized.
    pub child_node: Option<Vec<Option<Box<Node>>>>,
}

impl Node {
    /// An unexpanded node that was never visited.
    #[inline(always)]
    pub fn new() -> Self {
        Self::default()
    }

    /// An expanded node with the given legal moves, none of them visited yet.
    pub fn expanded<I: IntoIterator<Item = Move>>(moves: I) -> Self {
        let moves = Vec::from_iter(moves);
        Node {
            child_move_count: vec![0; moves.len()],
            child_sum_value: vec![0.0; moves.len()],
            child_move: Some(moves),
            ..Self::default()
        }
    }

    /// Sets the total number of visits.
    #[inline(always)]
    pub fn with_move_count(mut self, n: u32) -> Self {
        self.move_count = n;
        self
    }

    /// Sets the node's own value estimate.
    #[inline(always)]
    pub fn with_value(mut self, value: f32) -> Self {
        self.value = Some(value);
        self
    }

    /// Sets the prior probabilities of the children.
    #[inline(always)]
    pub fn with_policy(mut self, policy: Vec<f32>) -> Self {
        self.policy = Some(policy);
        self
    }

    /// Sets the statistics of the child at `idx`.
    ///
    /// Indices past the last child are ignored.
    pub fn with_visits(mut self, idx: usize, count: u32, sum: f32) -> Self {
        if let Some(c) = self.child_move_count.get_mut(idx) {
            *c = count;
        }

        if let Some(s) = self.child_sum_value.get_mut(idx) {
            *s = sum;
        }

        self
    }

    /// Materializes the subtree of the child at `idx`.
    ///
    /// Indices past the last child are ignored.
    pub fn with_child(mut self, idx: usize, node: Node) -> Self {
        let len = self.len();
        let children = self.child_node.get_or_insert_with(|| vec![None; len]);
        if let Some(c) = children.get_mut(idx) {
            *c = Some(Box::new(node));
        }

        self
    }

    /// Whether the legal moves from this node are known.
    #[inline(always)]
    pub fn is_expanded(&self) -> bool {
        self.child_move.is_some()
    }

    /// The legal moves from this node, if expanded.
    #[inline(always)]
    pub fn child_moves(&self) -> Option<&[Move]> {
        self.child_move.as_deref()
    }

    /// The number of children.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.child_moves().map_or(0, <[_]>::len)
    }

    /// Whether there are no children.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The move leading to the child at `idx`.
    #[inline(always)]
    pub fn child_move(&self, idx: usize) -> Option<Move> {
        self.child_moves()?.get(idx).copied()
    }

    /// Visits to the child at `idx`.
    #[inline(always)]
    pub fn visits(&self, idx: usize) -> Option<u32> {
        self.child_move_count.get(idx).copied()
    }

    /// The prior probability of the child at `idx`.
    #[inline(always)]
    pub fn prior(&self, idx: usize) -> Option<f32> {
        self.policy.as_deref()?.get(idx).copied()
    }

    /// The mean value of the child at `idx`, if it was ever visited.
    #[inline(always)]
    pub fn win_rate(&self, idx: usize) -> Option<WinRate> {
        let sum = *self.child_sum_value.get(idx)?;
        WinRate::mean(sum, self.visits(idx)?)
    }

    /// Whether any child subtree was materialized.
    #[inline(always)]
    pub fn has_children(&self) -> bool {
        self.child_node.is_some()
    }

    /// The subtree of the child at `idx`, if materialized.
    #[inline(always)]
    pub fn child(&self, idx: usize) -> Option<&Node> {
        self.child_node.as_deref()?.get(idx)?.as_deref()
    }

    /// The index of the most visited child, the first one among equals.
    pub fn most_visited(&self) -> Option<usize> {
        let counts = self.child_move_count.get(..self.len())?;
        let mut best = None;
        for (idx, &count) in counts.iter().enumerate() {
            match best {
                Some((_, n)) if n >= count => {}
                _ => best = Some((idx, count)),
            }
        }

        best.map(|(idx, _)| idx)
    }

    /// Whether the search proved this position won for the side to move.
    #[inline(always)]
    pub fn is_won(&self) -> bool {
        self.value == Some(VALUE_WIN)
    }

    /// Whether the per-child vectors agree with the number of legal moves.
    pub fn is_well_formed(&self) -> bool {
        let Some(moves) = self.child_moves() else {
            return true;
        };

        self.child_move_count.len() == moves.len()
            && self.child_sum_value.len() == moves.len()
            && self.child_node.as_ref().is_none_or(|c| c.len() == moves.len())
    }
}
