//! Disc flip calculation for move execution.

use crate::bitboard::{Bitboard, Direction};
use crate::square::Square;

/// Calculates which opponent discs would be flipped by placing a disc at the given square.
///
/// Each direction is walked outward from `sq` through opponent discs. The
/// collected run is kept only when the walk stops on one of the player's discs;
/// stopping on an empty square or running off the board discards it.
///
/// # Arguments
///
/// * `sq` - The square where the disc is being placed
/// * `p` - Bitboard representing the current player's discs
/// * `o` - Bitboard representing the opponent's discs
///
/// # Returns
///
/// A bitboard representing all opponent discs that would be flipped by this move.
/// Returns an empty bitboard if no discs would be flipped (invalid move).
#[inline]
pub fn flip(sq: Square, p: Bitboard, o: Bitboard) -> Bitboard {
    let origin = sq.bitboard();
    let mut flipped = Bitboard::EMPTY;

    for dir in Direction::ALL {
        let mut run = Bitboard::EMPTY;
        let mut cursor = dir.step(origin);
        while !(cursor & o).is_empty() {
            run |= cursor;
            cursor = dir.step(cursor);
        }
        if !(cursor & p).is_empty() {
            flipped |= run;
        }
    }

    flipped
}
