//! Fluent API for building KeyedGraph instances.

use crate::config::GraphConfig;
use crate::types::{DataIndex, GraphKind, GraphResult, VertexKey, DEFAULT_WEIGHT};

use super::KeyedGraph;

/// Fluent builder for constructing a KeyedGraph.
///
/// Vertices are inserted first, in the order given, then edges.
pub struct GraphBuilder {
    capacity: usize,
    kind: GraphKind,
    vertices: Vec<(VertexKey, DataIndex)>,
    edges: Vec<(VertexKey, VertexKey, f64)>,
}

impl GraphBuilder {
    /// Create a builder for a graph of the given capacity and kind.
    pub fn new(capacity: usize, kind: GraphKind) -> Self {
        Self {
            capacity,
            kind,
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Create a builder from configuration.
    pub fn from_config(config: &GraphConfig) -> Self {
        Self::new(config.capacity, config.kind)
    }

    /// Queue a vertex.
    pub fn vertex(&mut self, key: VertexKey, data_index: DataIndex) -> &mut Self {
        self.vertices.push((key, data_index));
        self
    }

    /// Queue an unweighted edge.
    pub fn edge(&mut self, start_key: VertexKey, finish_key: VertexKey) -> &mut Self {
        self.edges.push((start_key, finish_key, DEFAULT_WEIGHT));
        self
    }

    /// Queue a weighted edge.
    pub fn weighted_edge(
        &mut self,
        start_key: VertexKey,
        finish_key: VertexKey,
        weight: f64,
    ) -> &mut Self {
        self.edges.push((start_key, finish_key, weight));
        self
    }

    /// Build the final KeyedGraph, stopping at the first failure.
    ///
    /// A zero capacity is reported as `InvalidConfig`.
    pub fn build(&self) -> GraphResult<KeyedGraph> {
        let mut graph = KeyedGraph::from_config(&GraphConfig::new(self.capacity, self.kind))?;
        for &(key, data_index) in &self.vertices {
            graph.try_add_vertex(key, data_index)?;
        }
        for &(start, finish, weight) in &self.edges {
            graph.add_weighted_edge(start, finish, weight)?;
        }
        Ok(graph)
    }
}
