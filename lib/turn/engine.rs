use crate::mcts::Node;
use crate::shogi::Move;
use crate::turn::Limits;
use crate::usi::UsiOption;
use derive_more::with_trait::{Constructor, Display, Error, From};

/// A failure reported by the engine.
#[derive(Debug, Display, Clone, Eq, PartialEq, Hash, Error, From, Constructor)]
#[display("{_0}")]
pub struct EngineError(#[error(not(source))] String);

impl From<&str> for EngineError {
    fn from(msg: &str) -> Self {
        EngineError(msg.to_owned())
    }
}

/// The reason why an option could not be set.
#[derive(Debug, Display, Clone, Eq, PartialEq, Hash, Error)]
pub enum OptionError {
    #[display("unknown option `{_0}`")]
    Unknown(#[error(not(source))] String),
    #[display("invalid value {value:?} for option `{name}`")]
    InvalidValue { name: String, value: Option<String> },
}

/// The queries on the game state that a turn needs.
pub trait Position {
    /// Whether the side to move has no legal move.
    fn is_game_over(&self) -> bool;

    /// Whether the side to move may declare a win by entering king.
    fn is_nyugyoku(&self) -> bool;

    /// Whether the side to move is in check.
    fn is_check(&self) -> bool;

    /// A mating move found by a search of at most `plies` plies.
    fn mate_move(&self, plies: u8) -> Option<Move>;

    /// A move that mates immediately.
    fn mate_move_in_1ply(&self) -> Option<Move>;
}

/// Engine specific options.
pub trait Options {
    /// The options to advertise in response to `usi`.
    fn options(&self) -> Vec<UsiOption>;

    /// Sets the option `name`.
    fn set_option(&mut self, name: &str, value: Option<&str>) -> Result<(), OptionError>;
}

/// A Monte-Carlo tree search engine.
pub trait Engine: Options {
    type Position: Position;

    /// The position to move from.
    fn position(&self) -> &Self::Position;

    /// Replaces the current position, from the starting one if `sfen` is absent.
    fn set_position(&mut self, sfen: Option<&str>, moves: &[Move]) -> Result<(), EngineError>;

    /// Forgets everything learned in previous games.
    fn new_game(&mut self);

    /// Completes any pending initialization.
    fn is_ready(&mut self) -> Result<(), EngineError>;

    /// The root of the search tree for the current position.
    fn root(&self) -> &Node;

    /// Generates the legal moves of the root.
    fn expand_root(&mut self) -> Result<(), EngineError>;

    /// Computes the move priors and the value of the root.
    fn evaluate_root(&mut self) -> Result<(), EngineError>;

    /// Searches the current position within `limits`.
    fn search(&mut self, limits: &Limits) -> Result<(), EngineError>;

    /// The number of playouts performed by the last search.
    fn playouts(&self) -> u64;
}
