//! Error types for the undigraph library.

use thiserror::Error;

/// All errors that can occur in the undigraph library.
///
/// Every variant is recoverable: callers report it and carry on.
#[derive(Error, Debug)]
pub enum GraphError {
    /// An MST was requested on a graph with no vertices.
    #[error("Graph is empty")]
    EmptyGraph,

    /// The requested start vertex is not part of the graph.
    #[error("Vertex {0:?} not found")]
    VertexNotFound(String),

    /// The start vertex has no incident edges, so no spanning tree exists.
    #[error("Vertex {0:?} has no edges; no spanning tree is possible")]
    Disconnected(String),

    /// Unknown preset graph name (CLI only).
    #[error("Unknown preset graph: {0}")]
    UnknownPreset(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON rendering error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
