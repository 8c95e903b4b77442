use thiserror::Error;

/// Errors raised by the game engine.
///
/// Rejected moves (a filled cell, a move after the game ended) are not
/// errors; they surface as `RoundOutcome::Ignored`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("cell index {0} is out of range (expected 0..=8)")]
    InvalidIndex(usize),

    #[error("row/col ({row}, {col}) is out of range (expected 0..=2)")]
    InvalidPosition { row: usize, col: usize },

    #[error("invalid board layout: {0}")]
    InvalidBoard(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, GameError>;
