//! All data types for the KeyedGraph library.

pub mod edge;
pub mod error;
pub mod index;
pub mod kind;

pub use edge::{Edge, EdgeInsert, EdgeInsertion};
pub use error::{GraphError, GraphResult};
pub use index::{DataIndex, VertexIndex};
pub use kind::GraphKind;

/// Externally chosen vertex identifier.
pub type VertexKey = i64;

/// Weight carried by edges created through unweighted insertion.
pub const DEFAULT_WEIGHT: f64 = 0.0;
