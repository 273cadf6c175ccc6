use crate::mcts::Node;
use crate::shogi::Move;
use crate::turn::{Engine, EngineError, Limits, OptionError, Options, Position};
use crate::usi::UsiOption;
use log::debug;

/// What is known about a position whose search was recorded.
#[derive(Debug, Default, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub struct Recorded {
    pub game_over: bool,
    pub nyugyoku: bool,
    pub check: bool,
    /// The mate found by a 3-ply mate search, if any.
    pub mate_in_3: Option<Move>,
    /// The mate in 1, if any.
    pub mate_in_1: Option<Move>,
}

impl Position for Recorded {
    fn is_game_over(&self) -> bool {
        self.game_over
    }

    fn is_nyugyoku(&self) -> bool {
        self.nyugyoku
    }

    fn is_check(&self) -> bool {
        self.check
    }

    fn mate_move(&self, plies: u8) -> Option<Move> {
        self.mate_in_3.filter(|_| plies >= 3)
    }

    fn mate_move_in_1ply(&self) -> Option<Move> {
        self.mate_in_1
    }
}

/// An engine that answers every search with the same recorded tree.
///
/// Expanding the root only reveals the recorded legal moves, evaluating it
/// reveals the recorded priors and searching reveals the whole tree.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Replay {
    position: Recorded,
    tree: Node,
    root: Node,
    searched: bool,
}

impl Replay {
    pub fn new(position: Recorded, tree: Node) -> Self {
        Replay {
            position,
            tree,
            root: Node::new(),
            searched: false,
        }
    }

    fn reset(&mut self) {
        self.root = Node::new();
        self.searched = false;
    }
}

impl Options for Replay {
    fn options(&self) -> Vec<UsiOption> {
        Vec::new()
    }

    fn set_option(&mut self, name: &str, _: Option<&str>) -> Result<(), OptionError> {
        match name.to_ascii_lowercase().as_str() {
            "usi_hash" | "usi_ponder" => Ok(()),
            _ => Err(OptionError::Unknown(name.to_owned())),
        }
    }
}

impl Engine for Replay {
    type Position = Recorded;

    fn position(&self) -> &Recorded {
        &self.position
    }

    fn set_position(&mut self, sfen: Option<&str>, moves: &[Move]) -> Result<(), EngineError> {
        debug!("replaying from {} after {} moves", sfen.unwrap_or("startpos"), moves.len());
        self.reset();
        Ok(())
    }

    fn new_game(&mut self) {
        self.reset();
    }

    fn is_ready(&mut self) -> Result<(), EngineError> {
        Ok(())
    }

    fn root(&self) -> &Node {
        &self.root
    }

    fn expand_root(&mut self) -> Result<(), EngineError> {
        let moves = self.tree.child_moves().ok_or("the recorded root was never expanded")?;
        self.root = Node::expanded(moves.iter().copied());
        Ok(())
    }

    fn evaluate_root(&mut self) -> Result<(), EngineError> {
        let n = self.root.len();
        let uniform = || vec![1. / n as f32; n];
        self.root.policy = Some(self.tree.policy.clone().unwrap_or_else(uniform));
        self.root.value = self.tree.value;
        Ok(())
    }

    fn search(&mut self, _: &Limits) -> Result<(), EngineError> {
        self.root = self.tree.clone();
        self.searched = true;
        Ok(())
    }

    fn playouts(&self) -> u64 {
        if self.searched {
            self.tree.move_count.into()
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::{collection::vec, prelude::*};
    use test_strategy::proptest;

    #[proptest]
    fn expanding_reveals_only_the_legal_moves(
        #[strategy(vec(any::<Move>(), 1..10))] moves: Vec<Move>,
        n: u32,
    ) {
        let tree = Node::expanded(moves.clone()).with_visits(0, n, 0.);
        let mut e = Replay::new(Recorded::default(), tree);
        e.expand_root().expect("is ok");
        assert_eq!(e.root(), &Node::expanded(moves));
    }

    #[proptest]
    fn expanding_unexpanded_tree_fails(p: Recorded) {
        let mut e = Replay::new(p, Node::new());
        assert!(e.expand_root().is_err());
    }

    #[proptest]
    fn evaluating_reveals_uniform_priors_if_none_were_recorded(
        #[strategy(vec(any::<Move>(), 1..10))] moves: Vec<Move>,
    ) {
        let mut e = Replay::new(Recorded::default(), Node::expanded(moves.clone()));
        e.expand_root().expect("is ok");
        e.evaluate_root().expect("is ok");

        let priors = e.root().policy.clone().expect("is some");
        assert_eq!(priors.len(), moves.len());
        assert!(priors.iter().all(|&p| p == 1. / moves.len() as f32));
    }

    #[proptest]
    fn searching_reveals_the_whole_tree(
        #[strategy(vec(any::<Move>(), 1..10))] moves: Vec<Move>,
        n: u32,
        l: Limits,
    ) {
        let tree = Node::expanded(moves).with_visits(0, n, 0.).with_move_count(n);
        let mut e = Replay::new(Recorded::default(), tree.clone());
        assert_eq!(e.playouts(), 0);

        e.search(&l).expect("is ok");
        assert_eq!(e.root(), &tree);
        assert_eq!(e.playouts(), u64::from(n));

        e.set_position(None, &[]).expect("is ok");
        assert_eq!(e.root(), &Node::new());
        assert_eq!(e.playouts(), 0);
    }

    #[proptest]
    fn mate_in_3_requires_deep_enough_search(#[strategy(..3u8)] plies: u8, m: Move) {
        let p = Recorded {
            mate_in_3: Some(m),
            ..Recorded::default()
        };

        assert_eq!(p.mate_move(plies), None);
        assert_eq!(p.mate_move(3), Some(m));
    }

    #[test]
    fn accepts_standard_options_only() {
        let mut e = Replay::default();
        assert_eq!(e.set_option("USI_Hash", Some("256")), Ok(()));
        assert_eq!(e.set_option("USI_Ponder", Some("true")), Ok(()));
        assert!(e.set_option("Threads", Some("4")).is_err());
    }
}
