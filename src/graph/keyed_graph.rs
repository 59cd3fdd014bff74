//! Core graph structure — fixed-capacity vertex list with keyed lookup.

use log::{debug, trace, warn};

use crate::config::GraphConfig;
use crate::types::{
    DataIndex, Edge, EdgeInsertion, GraphError, GraphKind, GraphResult, VertexIndex, VertexKey,
    DEFAULT_WEIGHT,
};

use super::Vertex;

/// A graph whose vertex count is bounded at creation.
///
/// Vertices occupy positions `[0, vertex_count())` in insertion order and
/// are never removed. Keys are not required to be unique; every key-based
/// operation resolves to the earliest-inserted vertex with that key.
#[derive(Debug)]
pub struct KeyedGraph {
    /// Never grows past `capacity`.
    vertices: Vec<Vertex>,
    capacity: usize,
    kind: GraphKind,
}

impl KeyedGraph {
    /// Create an empty graph able to hold `capacity` vertices.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize, kind: GraphKind) -> GraphResult<Self> {
        assert!(capacity > 0, "graph capacity must be greater than zero");

        let mut vertices = Vec::new();
        vertices.try_reserve_exact(capacity)?;
        debug!("created {} graph with capacity {}", kind, capacity);

        Ok(Self {
            vertices,
            capacity,
            kind,
        })
    }

    /// Create a graph from validated configuration.
    pub fn from_config(config: &GraphConfig) -> GraphResult<Self> {
        config.validate()?;
        Self::new(config.capacity, config.kind)
    }

    /// Maximum number of vertices.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of vertices inserted so far.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.vertices.len() >= self.capacity
    }

    pub fn kind(&self) -> GraphKind {
        self.kind
    }

    /// Total adjacency-list entries. An undirected link counts twice
    /// (once per endpoint) unless it is a self-loop.
    pub fn edge_count(&self) -> usize {
        self.vertices.iter().map(Vertex::degree).sum()
    }

    /// Append a vertex and return its position.
    ///
    /// No duplicate-key check is made.
    ///
    /// # Panics
    ///
    /// Panics if the graph is full.
    pub fn add_vertex(&mut self, key: VertexKey, data_index: DataIndex) -> VertexIndex {
        assert!(
            !self.is_full(),
            "add_vertex on a full graph (capacity {})",
            self.capacity
        );
        self.push_vertex(key, data_index)
    }

    /// Append a vertex, reporting a full graph as an error.
    pub fn try_add_vertex(
        &mut self,
        key: VertexKey,
        data_index: DataIndex,
    ) -> GraphResult<VertexIndex> {
        if self.is_full() {
            return Err(GraphError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        Ok(self.push_vertex(key, data_index))
    }

    fn push_vertex(&mut self, key: VertexKey, data_index: DataIndex) -> VertexIndex {
        let index = VertexIndex(self.vertices.len());
        // Storage was reserved up front, so this never reallocates.
        self.vertices.push(Vertex::new(key, data_index));
        debug!("vertex {} -> {} (data {})", key, index, data_index);
        index
    }

    /// Position of the first vertex with `key`.
    pub fn find_vertex_index(&self, key: VertexKey) -> Option<VertexIndex> {
        let found = self
            .vertices
            .iter()
            .position(|v| v.key() == key)
            .map(VertexIndex);
        trace!("lookup {} -> {:?}", key, found);
        found
    }

    pub fn contains_key(&self, key: VertexKey) -> bool {
        self.find_vertex_index(key).is_some()
    }

    /// The first vertex with `key`.
    pub fn vertex_by_key(&self, key: VertexKey) -> Option<&Vertex> {
        self.find_vertex_index(key)
            .map(|index| &self.vertices[index.as_usize()])
    }

    /// The vertex at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below `vertex_count()`.
    pub fn vertex_by_index(&self, index: VertexIndex) -> &Vertex {
        assert!(
            index.as_usize() < self.vertices.len(),
            "vertex index {} out of range (count {})",
            index,
            self.vertices.len()
        );
        &self.vertices[index.as_usize()]
    }

    /// The vertex at `index`, or `None` if out of range.
    pub fn get_vertex(&self, index: VertexIndex) -> Option<&Vertex> {
        self.vertices.get(index.as_usize())
    }

    /// Head of the adjacency list of the first vertex with `key`.
    ///
    /// `None` both when the key is absent and when the vertex has no
    /// neighbors.
    pub fn neighbors_head_by_key(&self, key: VertexKey) -> Option<&Edge> {
        self.vertex_by_key(key).and_then(Vertex::first_edge)
    }

    /// Re-derive a vertex's position by scanning for its key.
    ///
    /// With duplicate keys this is the position of the first vertex
    /// sharing the key, which may differ from where `vertex` lives.
    ///
    /// # Panics
    ///
    /// Panics if no vertex in this graph has `vertex.key()`.
    pub fn vertex_position(&self, vertex: &Vertex) -> VertexIndex {
        match self.find_vertex_index(vertex.key()) {
            Some(index) => index,
            None => panic!("vertex with key {} does not belong to this graph", vertex.key()),
        }
    }

    /// Vertices in position order.
    pub fn vertices(&self) -> impl ExactSizeIterator<Item = (VertexIndex, &Vertex)> {
        self.vertices
            .iter()
            .enumerate()
            .map(|(i, v)| (VertexIndex(i), v))
    }

    /// Link `start_key` to `finish_key` with the default weight.
    ///
    /// For undirected graphs the reverse link is inserted too. Each side is
    /// deduplicated on its own: an existing edge on one side does not stop
    /// the other from being created.
    pub fn add_edge(
        &mut self,
        start_key: VertexKey,
        finish_key: VertexKey,
    ) -> GraphResult<EdgeInsertion> {
        self.insert_edge(start_key, finish_key, DEFAULT_WEIGHT)
    }

    /// Link `start_key` to `finish_key` carrying `weight`.
    ///
    /// Duplicates follow the same rule as [`add_edge`](Self::add_edge): an
    /// existing edge is kept as is and its weight is not overwritten.
    pub fn add_weighted_edge(
        &mut self,
        start_key: VertexKey,
        finish_key: VertexKey,
        weight: f64,
    ) -> GraphResult<EdgeInsertion> {
        self.insert_edge(start_key, finish_key, weight)
    }

    fn insert_edge(
        &mut self,
        start_key: VertexKey,
        finish_key: VertexKey,
        weight: f64,
    ) -> GraphResult<EdgeInsertion> {
        // Both endpoints resolve before anything is touched.
        let start = self.resolve(start_key)?;
        let finish = self.resolve(finish_key)?;
        debug!(
            "edge {} ({}) -> {} ({}), weight {}",
            start_key, start, finish_key, finish, weight
        );

        let symmetric = !self.kind.is_directed();

        self.vertices[start.as_usize()].reserve_edge()?;
        if symmetric {
            self.vertices[finish.as_usize()].reserve_edge()?;
        }

        let forward = self.vertices[start.as_usize()].insert(finish, weight)?;
        let reverse = if symmetric {
            Some(self.vertices[finish.as_usize()].insert(start, weight)?)
        } else {
            None
        };

        Ok(EdgeInsertion { forward, reverse })
    }

    fn resolve(&self, key: VertexKey) -> GraphResult<VertexIndex> {
        self.find_vertex_index(key).ok_or_else(|| {
            warn!("edge endpoint {} not found", key);
            GraphError::VertexNotFound(key)
        })
    }

    /// Weight of the edge `start_key -> finish_key`, if it exists.
    pub fn weight(&self, start_key: VertexKey, finish_key: VertexKey) -> Option<f64> {
        let finish = self.find_vertex_index(finish_key)?;
        self.vertex_by_key(start_key)?
            .edge_to(finish)
            .map(|e| e.weight)
    }

    /// Release the graph and everything it owns.
    ///
    /// Taking `self` by value means the handle cannot be used afterwards.
    pub fn delete(self) {
        debug!(
            "deleting graph: {} vertices, {} edges",
            self.vertex_count(),
            self.edge_count()
        );
    }
}
