//! Error types for the pathgraph library.

use thiserror::Error;

/// All errors that can occur in the pathgraph library.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Vertex not present in the graph.
    #[error("Vertex {0} is not in the graph")]
    NotFound(String),

    /// Edge not present in the graph.
    #[error("Edge {{{a}, {b}}} is not in the graph")]
    EdgeNotFound { a: String, b: String },

    /// No path joins the two vertices.
    #[error("Vertices {start} and {target} are not connected")]
    NotConnected { start: String, target: String },

    /// Self-loop rejected by the graph's configuration.
    #[error("Self-loop not allowed on vertex {0}")]
    SelfLoop(String),

    /// Malformed edge-list line.
    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl GraphError {
    pub(crate) fn not_found<V: std::fmt::Debug>(vertex: &V) -> Self {
        Self::NotFound(format!("{vertex:?}"))
    }

    pub(crate) fn edge_not_found<V: std::fmt::Debug>(a: &V, b: &V) -> Self {
        Self::EdgeNotFound {
            a: format!("{a:?}"),
            b: format!("{b:?}"),
        }
    }

    pub(crate) fn not_connected<V: std::fmt::Debug>(start: &V, target: &V) -> Self {
        Self::NotConnected {
            start: format!("{start:?}"),
            target: format!("{target:?}"),
        }
    }
}

/// Convenience result type for pathgraph operations.
pub type GraphResult<T> = Result<T, GraphError>;
