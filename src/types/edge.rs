//! The adjacency-list edge value and insertion outcomes.

use serde::Serialize;

use super::{VertexIndex, DEFAULT_WEIGHT};

/// One entry in a vertex's adjacency list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Edge {
    /// Position of the adjacent vertex in the vertex list.
    pub target: VertexIndex,
    /// Stored as given; no arithmetic is ever applied to it.
    pub weight: f64,
}

impl Edge {
    /// Create an unweighted edge.
    pub fn new(target: VertexIndex) -> Self {
        Self {
            target,
            weight: DEFAULT_WEIGHT,
        }
    }

    /// Create an edge with an explicit weight.
    pub fn weighted(target: VertexIndex, weight: f64) -> Self {
        Self { target, weight }
    }
}

/// Result of inserting one direction of an edge into an adjacency list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeInsert {
    /// A new edge was appended.
    Inserted,
    /// The target was already present; nothing changed.
    Duplicate,
}

impl EdgeInsert {
    /// True if a new edge was created.
    pub fn is_inserted(&self) -> bool {
        matches!(self, Self::Inserted)
    }
}

/// Per-direction outcome of `add_edge` / `add_weighted_edge`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeInsertion {
    /// start -> finish.
    pub forward: EdgeInsert,
    /// finish -> start; `None` for directed graphs.
    pub reverse: Option<EdgeInsert>,
}

impl EdgeInsertion {
    /// True if at least one adjacency list gained an edge.
    pub fn created_any(&self) -> bool {
        self.forward.is_inserted() || self.reverse.is_some_and(|r| r.is_inserted())
    }

    /// True if every attempted direction was already present.
    pub fn is_duplicate(&self) -> bool {
        !self.created_any()
    }
}
