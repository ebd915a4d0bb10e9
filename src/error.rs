use thiserror::Error;

/// Rejected engine configuration. Raised at construction, never mid-search.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("max_depth must be at least 1, got {0}")]
    InvalidDepth(u32),
    #[error("beam search is enabled but beam_width is 0")]
    ZeroBeamWidth,
}

/// Bad input handed to the chess collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PositionError {
    #[error("invalid FEN {fen:?}: {reason}")]
    InvalidFen { fen: String, reason: String },
    #[error("illegal move: {0}")]
    IllegalMove(String),
}
