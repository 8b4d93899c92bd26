//! Error type for every fallible graph operation.
//!
//! [`GraphError`] covers structural violations (missing or duplicate vertices
//! and edges), requests that make no sense for a particular graph (a self-loop
//! in a simple graph, a topological order of an undirected graph), and failures
//! while reading edge-list input.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GraphError>;

// ---------------------------------------------------------------------------
// Graph errors
// ---------------------------------------------------------------------------

/// Errors produced by graph construction, mutation, algorithms and edge-list I/O.
///
/// The structural variants carry no payload: the caller already holds the
/// vertices it passed in and can report them with whatever formatting it likes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GraphError {
    /// A referenced vertex is not in the graph.
    #[error("Vertex not found.")]
    VertexNotFound,

    /// The vertex being added is already in the graph.
    #[error("Vertex already exists.")]
    VertexAlreadyExists,

    /// The edge being added is already in the graph.
    #[error("Edge already exists.")]
    EdgeAlreadyExists,

    /// The edge being removed is not in the graph.
    #[error("Edge not found.")]
    EdgeNotFound,

    /// The requested operation is not valid for this graph.
    ///
    /// Produced by: self-loop insertion, directed-only algorithms on an
    /// undirected graph, negative weights in Dijkstra's algorithm.
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// A topological order was requested for a graph that contains a cycle.
    #[error("Graph contains a cycle.")]
    CycleDetected,

    /// A line of edge-list input could not be interpreted.
    #[error("Invalid edge list at line {line}: {reason}")]
    EdgeList {
        /// 1-based line number of the offending line.
        line: usize,
        /// What was wrong with the line.
        reason: String,
    },

    /// The edge-list source could not be opened or read.
    ///
    /// The underlying [`std::io::Error`] is flattened to its message so the
    /// error stays `Clone` and comparable.
    #[error("Failed to read '{path}': {message}")]
    Io {
        /// Path of the source being read.
        path: String,
        /// Message of the underlying I/O error.
        message: String,
    },
}

impl GraphError {
    /// Shorthand for [`GraphError::InvalidOperation`].
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidOperation(reason.into())
    }

    /// Shorthand for [`GraphError::EdgeList`].
    pub fn edge_list(line: usize, reason: impl Into<String>) -> Self {
        Self::EdgeList {
            line,
            reason: reason.into(),
        }
    }
}
