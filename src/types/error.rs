//! Error types for the KeyedGraph library.

use thiserror::Error;

use super::VertexKey;

/// Recoverable errors reported by graph operations.
///
/// Caller programming errors (zero capacity, inserting into a full graph
/// through `add_vertex`, advancing an exhausted cursor, out-of-range
/// positional access) are not represented here; they panic.
#[derive(Error, Debug)]
pub enum GraphError {
    /// No vertex carries the requested key.
    #[error("No vertex with key {0}")]
    VertexNotFound(VertexKey),

    /// Every vertex slot is already occupied.
    #[error("Graph is full: capacity {capacity}")]
    CapacityExceeded { capacity: usize },

    /// Vertex or edge storage could not be allocated.
    #[error("Allocation failed: {0}")]
    Allocation(String),

    /// Configuration values are out of range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed configuration document.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<std::collections::TryReserveError> for GraphError {
    fn from(err: std::collections::TryReserveError) -> Self {
        Self::Allocation(err.to_string())
    }
}

/// Convenience result type for KeyedGraph operations.
pub type GraphResult<T> = Result<T, GraphError>;
