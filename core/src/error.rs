//! Error types for graph construction, loading and traversal queries.

use thiserror::Error;

use crate::graph::VertexId;

/// All errors that can occur in graph-search-core.
#[derive(Error, Debug)]
pub enum GraphError {
    /// A graph needs at least one vertex.
    #[error("graph must have at least one vertex")]
    EmptyGraph,

    /// A vertex id outside `[0, vertex_count)`.
    #[error("vertex {vertex} out of range for graph with {vertex_count} vertices")]
    VertexOutOfRange {
        vertex: VertexId,
        vertex_count: usize,
    },

    /// Adjacency storage for this many vertices could not be allocated.
    #[error("cannot allocate a graph with {vertex_count} vertices")]
    TooLarge { vertex_count: usize },

    /// Malformed edge-list input.
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;

/// Validate `vertex` against a graph of `vertex_count` vertices.
pub(crate) fn check_vertex(vertex: VertexId, vertex_count: usize) -> GraphResult<()> {
    if vertex < vertex_count {
        Ok(())
    } else {
        Err(GraphError::VertexOutOfRange {
            vertex,
            vertex_count,
        })
    }
}
