//! Bitboard Othello engine.
//!
//! The [`board::Board`] keeps both sides' discs as 64-bit masks relative to
//! the side to move and supports move generation, in-place moves with undo,
//! passes, and the positional metrics used when recording games. The
//! [`search::Searcher`] runs a fixed-depth negamax alpha-beta search over any
//! [`eval::Evaluator`].

pub mod bitboard;
pub mod board;
pub mod constants;
pub mod disc;
pub mod error;
pub mod eval;
mod flip;
pub mod game;
pub mod perft;
pub mod search;
pub mod square;
mod stability;
pub mod types;

pub use board::{Board, Outcome, Perspective};
pub use disc::Disc;
pub use error::{BoardError, ConfigError, GameError};
pub use search::Searcher;
pub use square::Square;
