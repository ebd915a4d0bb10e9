// Fixed-depth alpha-beta chess search: beam cut, move-list cache, classic eval
pub mod board;
pub mod error;
pub mod perft;
pub mod search;
pub mod selfplay;

pub use board::cozy::ChessPosition;
pub use board::{Applied, Outcome, Rules, Side};
pub use error::{ConfigError, PositionError};
pub use search::alphabeta::{SearchConfig, SearchEngine, SearchResult};
pub use search::eval::{ClassicEval, Evaluator, Score, MAX_VALUE, MIN_VALUE};

/// The engine as the binaries use it.
pub type ChessEngine = SearchEngine<ChessPosition, ClassicEval>;
