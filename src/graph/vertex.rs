//! A single vertex and its adjacency list.

use log::debug;

use crate::types::{DataIndex, Edge, EdgeInsert, GraphResult, VertexIndex, VertexKey};

use super::NeighborCursor;

/// A graph node: caller key, external-table index, and outgoing edges.
///
/// Edges are kept in insertion order internally but always enumerated
/// newest-first, so the most recently inserted neighbor is the list head.
/// Callers must not rely on that order beyond "last inserted comes first".
#[derive(Debug, Clone)]
pub struct Vertex {
    key: VertexKey,
    data_index: DataIndex,
    /// At most one edge per distinct target.
    edges: Vec<Edge>,
}

impl Vertex {
    pub(crate) fn new(key: VertexKey, data_index: DataIndex) -> Self {
        Self {
            key,
            data_index,
            edges: Vec::new(),
        }
    }

    /// The caller-chosen key.
    pub fn key(&self) -> VertexKey {
        self.key
    }

    /// Index into the caller's data table.
    pub fn data_index(&self) -> DataIndex {
        self.data_index
    }

    /// Number of outgoing edges.
    pub fn degree(&self) -> usize {
        self.edges.len()
    }

    pub fn has_neighbors(&self) -> bool {
        !self.edges.is_empty()
    }

    /// Begin a traversal of this vertex's neighbors.
    ///
    /// Each call returns an independent cursor positioned at the head;
    /// several may be alive at once.
    pub fn cursor(&self) -> NeighborCursor<'_> {
        NeighborCursor::new(&self.edges)
    }

    /// Iterate edges newest-first.
    pub fn neighbors(&self) -> impl DoubleEndedIterator<Item = &Edge> + ExactSizeIterator {
        self.edges.iter().rev()
    }

    /// The head of the adjacency list (most recently inserted edge).
    pub fn first_edge(&self) -> Option<&Edge> {
        self.edges.last()
    }

    /// The edge pointing at `target`, if any.
    pub fn edge_to(&self, target: VertexIndex) -> Option<&Edge> {
        self.edges.iter().find(|e| e.target == target)
    }

    pub fn has_neighbor(&self, target: VertexIndex) -> bool {
        self.edge_to(target).is_some()
    }

    /// Make room for one more edge without inserting it.
    pub(crate) fn reserve_edge(&mut self) -> GraphResult<()> {
        self.edges.try_reserve(1)?;
        Ok(())
    }

    /// Add an edge to `target` unless one already exists.
    ///
    /// An existing edge is left untouched, including its weight.
    pub(crate) fn insert(&mut self, target: VertexIndex, weight: f64) -> GraphResult<EdgeInsert> {
        if self.has_neighbor(target) {
            debug!("vertex {}: duplicate edge to {}", self.key, target);
            return Ok(EdgeInsert::Duplicate);
        }

        self.reserve_edge()?;
        self.edges.push(Edge::weighted(target, weight));
        debug!(
            "vertex {}: edge to {} (weight {})",
            self.key, target, weight
        );
        Ok(EdgeInsert::Inserted)
    }
}
