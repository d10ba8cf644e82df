//! Global constants

use crate::square::TOTAL_SQUARES;
use crate::types::Score;

/// Capacity of a move list.
///
/// Boards built from arbitrary masks can exceed the 33 moves seen in play, so
/// every square is allowed for.
pub const MAX_MOVES: usize = TOTAL_SQUARES;

/// Maximum possible disc difference.
pub const SCORE_MAX: Score = 64;

/// Infinity score for search windows.
///
/// Every evaluator shipped with the crate stays strictly inside `(-SCORE_INF, SCORE_INF)`.
pub const SCORE_INF: Score = 1 << 30;
