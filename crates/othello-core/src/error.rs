//! Error types shared across the crate.

use thiserror::Error;

use crate::disc::Disc;
use crate::square::Square;

/// Errors raised while constructing or mutating a [`Board`](crate::board::Board).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("illegal move: {0}")]
    IllegalMove(Square),
    #[error("board string must describe 64 squares, got {0}")]
    InvalidLength(usize),
    #[error("invalid board character '{0}'")]
    InvalidChar(char),
    #[error("player and opponent discs overlap: {0:#018x}")]
    Overlap(u64),
    #[error("side to move must be Black or White")]
    NoSideToMove,
}

/// Errors raised when building evaluator or search configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("square weight table needs 64 entries, got {0}")]
    WeightCount(usize),
    #[error("square weight {0} is too large for the search window")]
    WeightRange(i64),
}

/// Errors raised by the self-play driver.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("{side:?} returned no move at ply {ply} although legal moves exist")]
    MissingMove { side: Disc, ply: usize },
    #[error(transparent)]
    Board(#[from] BoardError),
}
