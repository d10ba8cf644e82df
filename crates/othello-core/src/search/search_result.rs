//! Search result types.

use crate::square::Square;
use crate::types::{Depth, Score};

/// Result of a search operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Value of the root position for the side to move.
    pub score: Score,
    /// Move to play, or `None` when the side to move must pass or the root
    /// was not expanded (depth 0 or game over).
    pub best_move: Option<Square>,
    /// Number of nodes visited, the root included.
    pub n_nodes: u64,
    /// Depth the search was run to.
    pub depth: Depth,
}
