//! Configuration for graph construction.

/// Limits applied when a [`Graph`](crate::Graph) is built.
///
/// Every algorithm runs to completion once started, so these caps are the
/// only way to bound the work of a call up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphConfig {
    /// Maximum number of vertices a graph may hold.
    pub max_vertices: usize,
    /// Maximum number of undirected edges a graph may hold.
    pub max_edges: usize,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            max_vertices: 1 << 24,
            max_edges: 1 << 26,
        }
    }
}

impl GraphConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn max_vertices(mut self, max: usize) -> Self {
        self.max_vertices = max;
        self
    }

    #[must_use]
    pub const fn max_edges(mut self, max: usize) -> Self {
        self.max_edges = max;
        self
    }

    /// Unbounded limits, for callers that validate sizes themselves.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            max_vertices: usize::MAX,
            max_edges: usize::MAX,
        }
    }
}
