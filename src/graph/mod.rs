//! In-memory graph operations — the core data structure.

pub mod builder;
pub mod cursor;
pub mod keyed_graph;
pub mod vertex;

pub use builder::GraphBuilder;
pub use cursor::NeighborCursor;
pub use keyed_graph::KeyedGraph;
pub use vertex::Vertex;
