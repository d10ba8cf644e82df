//! Search configuration.

use crate::types::Depth;

/// Depth used when none is configured.
pub const DEFAULT_DEPTH: Depth = 4;

/// Options controlling a [`Searcher`](crate::search::Searcher).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    /// Number of plies to look ahead. Passes count as plies; `0` evaluates
    /// the root position directly.
    pub depth: Depth,
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions {
            depth: DEFAULT_DEPTH,
        }
    }
}

impl SearchOptions {
    /// Creates options searching `depth` plies ahead.
    pub fn new(depth: Depth) -> Self {
        SearchOptions { depth }
    }
}
