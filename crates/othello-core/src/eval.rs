//! Static position evaluation.
//!
//! Every evaluator scores a position from the point of view of the side to
//! move, which is what the negamax search expects at its leaves.

use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::constants::SCORE_INF;
use crate::error::ConfigError;
use crate::square::{Square, TOTAL_SQUARES};
use crate::types::Score;

/// Scores a position for the side to move.
pub trait Evaluator {
    /// Returns the value of `board` for the side about to move.
    fn evaluate(&self, board: &Board) -> Score;
}

impl<F> Evaluator for F
where
    F: Fn(&Board) -> Score,
{
    #[inline]
    fn evaluate(&self, board: &Board) -> Score {
        self(board)
    }
}

/// Largest absolute weight a square may carry.
///
/// Keeps `64 * weight` strictly inside the search window.
pub const MAX_SQUARE_WEIGHT: Score = SCORE_INF / TOTAL_SQUARES as Score - 1;

/// Per-square weight table, indexed by [`Square::index`].
///
/// The value of a position is the sum of the weights under the mover's discs
/// minus the sum under the opponent's discs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SquareWeights([Score; TOTAL_SQUARES]);

#[rustfmt::skip]
const CLASSIC_WEIGHTS: [Score; TOTAL_SQUARES] = [
    100, -40,  20,   5,   5,  20, -40, 100,
    -40, -80,  -1,  -1,  -1,  -1, -80, -40,
     20,  -1,   5,   1,   1,   5,  -1,  20,
      5,  -1,   1,   0,   0,   1,  -1,   5,
      5,  -1,   1,   0,   0,   1,  -1,   5,
     20,  -1,   5,   1,   1,   5,  -1,  20,
    -40, -80,  -1,  -1,  -1,  -1, -80, -40,
    100, -40,  20,   5,   5,  20, -40, 100,
];

impl Default for SquareWeights {
    fn default() -> Self {
        SquareWeights::zero()
    }
}

impl SquareWeights {
    /// A table where every square is worth nothing.
    pub const fn zero() -> Self {
        SquareWeights([0; TOTAL_SQUARES])
    }

    /// A conventional corner-heavy table (corners good, X and C squares bad).
    pub const fn classic() -> Self {
        SquareWeights(CLASSIC_WEIGHTS)
    }

    /// Builds a table from a full array of weights.
    ///
    /// # Errors
    ///
    /// [`ConfigError::WeightRange`] if any weight exceeds [`MAX_SQUARE_WEIGHT`]
    /// in absolute value.
    pub fn new(weights: [Score; TOTAL_SQUARES]) -> Result<Self, ConfigError> {
        if let Some(&w) = weights.iter().find(|w| w.unsigned_abs() > MAX_SQUARE_WEIGHT as u32) {
            return Err(ConfigError::WeightRange(w as i64));
        }
        Ok(SquareWeights(weights))
    }

    /// Builds a table from a slice, e.g. one read from a configuration file.
    ///
    /// # Arguments
    ///
    /// * `weights` - Exactly 64 weights, A1 first.
    ///
    /// # Errors
    ///
    /// [`ConfigError::WeightCount`] for a slice of the wrong length, otherwise
    /// as [`SquareWeights::new`].
    pub fn from_slice(weights: &[Score]) -> Result<Self, ConfigError> {
        let table: [Score; TOTAL_SQUARES] = weights
            .try_into()
            .map_err(|_| ConfigError::WeightCount(weights.len()))?;
        SquareWeights::new(table)
    }

    /// Returns the weight of a single square.
    #[inline]
    pub fn weight(&self, sq: Square) -> Score {
        self.0[sq.index()]
    }

    /// Returns the raw table.
    pub fn as_array(&self) -> &[Score; TOTAL_SQUARES] {
        &self.0
    }

    /// Returns the sum of absolute weights: no evaluation can exceed it.
    pub fn max_abs_sum(&self) -> Score {
        self.0.iter().map(|w| w.abs()).sum()
    }

    /// Sums the weights under a set of discs.
    #[inline]
    fn sum(&self, discs: Bitboard) -> Score {
        discs.iter().map(|sq| self.weight(sq)).sum()
    }

    /// Square-value total from the point of view of the side that just moved.
    ///
    /// This is the negation of [`Evaluator::evaluate`] and is what gets
    /// recorded after each ply.
    pub fn square_value_sum(&self, board: &Board) -> Score {
        self.sum(board.opponent()) - self.sum(board.player())
    }
}

impl Evaluator for SquareWeights {
    #[inline]
    fn evaluate(&self, board: &Board) -> Score {
        self.sum(board.player()) - self.sum(board.opponent())
    }
}

/// Mover's disc count minus the opponent's.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiscDifference;

impl Evaluator for DiscDifference {
    #[inline]
    fn evaluate(&self, board: &Board) -> Score {
        board.disc_difference()
    }
}
