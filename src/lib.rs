//! KeyedGraph — fixed-capacity graph over caller-owned records.
//!
//! Vertices pair a caller-chosen integer key with an opaque index into an
//! external data table. Edges are stored per vertex as a deduplicated,
//! optionally weighted adjacency list and are walked with independent
//! cursors.

pub mod config;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use config::GraphConfig;
pub use graph::{GraphBuilder, KeyedGraph, NeighborCursor, Vertex};
pub use types::{
    DataIndex, Edge, EdgeInsert, EdgeInsertion, GraphError, GraphKind, GraphResult, VertexIndex,
    VertexKey,
};
