//! Error types for the weighted graph algorithms.

use thiserror::Error;

/// Error type for graph construction and algorithm invocation.
#[derive(Debug, Error, Clone, PartialEq, Eq, Hash)]
pub enum GraphError {
    /// A vertex index lies outside `[0, vertex_count)`.
    #[error("vertex {vertex} out of range for graph with {vertex_count} vertices")]
    VertexOutOfRange { vertex: usize, vertex_count: usize },

    /// A raw edge row names a negative vertex.
    #[error("edge {index} has negative vertex index {vertex}")]
    NegativeVertex { index: usize, vertex: i64 },

    /// A raw edge row carries a negative weight.
    #[error("edge {index} has negative weight: {weight}")]
    NegativeWeight { index: usize, weight: i64 },

    /// A raw edge row is not a `(from, to, weight)` triple.
    #[error("edge {index} is malformed: expected 3 fields, got {len}")]
    MalformedEdge { index: usize, len: usize },

    /// A cumulative path weight does not fit in a `u64`.
    #[error("path weight overflow while reaching vertex {vertex}")]
    WeightOverflow { vertex: usize },

    /// Graph size exceeds the configured limit.
    #[error("{what} limit exceeded: {actual} > {limit}")]
    CapacityExceeded {
        what: &'static str,
        limit: usize,
        actual: usize,
    },
}

/// Result type alias for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;
