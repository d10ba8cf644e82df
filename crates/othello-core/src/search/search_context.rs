//! Per-search mutable state.

/// Bookkeeping carried through one search invocation.
#[derive(Debug, Default)]
pub(crate) struct SearchContext {
    /// Nodes visited so far.
    pub n_nodes: u64,
}

impl SearchContext {
    pub fn new() -> SearchContext {
        SearchContext::default()
    }

    #[inline(always)]
    pub fn increment_nodes(&mut self) {
        self.n_nodes += 1;
    }
}
