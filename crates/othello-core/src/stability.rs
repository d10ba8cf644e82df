//! Edge stability detection.
//!
//! A disc on the rim can only be flipped along the edge it sits on. If an
//! unbroken run of same-coloured discs connects it to a corner, no move can
//! ever bracket it, so it is stable. Interior discs are never reported.

use crate::bitboard::{Bitboard, Direction, EDGE_MASK};

/// Corners from which each edge run is grown, and the direction it grows in.
const ANCHORS: [(u64, Direction); 4] = [
    // A1, A8 along ranks 1 and 8.
    (0x0100000000000001, Direction::East),
    // H1, H8 along ranks 1 and 8.
    (0x8000000000000080, Direction::West),
    // A1, H1 along files A and H.
    (0x0000000000000081, Direction::South),
    // A8, H8 along files A and H.
    (0x8100000000000000, Direction::North),
];

/// Number of squares between two corners on one edge.
const EDGE_RUN: usize = 6;

/// Gets the discs on the board edges that are anchored to a corner.
///
/// # Arguments
///
/// * `discs` - The discs of one side.
///
/// # Returns
///
/// The subset of `discs` on the rim that are connected to an owned corner by
/// an unbroken run of `discs` along that edge. Owned corners are always
/// included.
pub fn get_stable_edge_discs(discs: Bitboard) -> Bitboard {
    let rim = discs & Bitboard::new(EDGE_MASK);

    ANCHORS
        .iter()
        .fold(Bitboard::EMPTY, |stable, &(corners, dir)| {
            let mut run = rim & Bitboard::new(corners);
            for _ in 0..EDGE_RUN {
                run |= rim & dir.step(run);
            }
            stable | run
        })
}
