//! Move-generator verification by exhaustive tree counting.

use crate::board::{Board, Perspective};
use crate::types::Depth;

/// Executes a perft run starting from the standard initial position.
///
/// # Arguments
///
/// * `depth` - Number of plies to expand from the initial position. A depth of
///   `1` counts the immediate legal moves; larger values walk the tree
///   recursively.
///
/// # Returns
///
/// The total leaf count of the tree.
pub fn perft_root(depth: Depth) -> u64 {
    let mut board = Board::new();
    perft(&mut board, depth)
}

/// Counts the leaves of the move tree below `board`.
///
/// A forced pass does not use up depth, and a finished game counts as a
/// single leaf. The board is restored before returning.
pub fn perft(board: &mut Board, depth: Depth) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = board.legal_moves(Perspective::Mover);
    if moves.is_empty() {
        if board.legal_moves(Perspective::Opponent).is_empty() {
            return 1;
        }
        board.pass();
        let nodes = perft(board, depth);
        board.undo();
        return nodes;
    }

    if depth == 1 {
        return moves.count() as u64;
    }

    let mut nodes = 0;
    for sq in moves {
        board.apply_move(sq);
        nodes += perft(board, depth - 1);
        board.undo();
    }
    nodes
}
