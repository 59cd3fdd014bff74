//! Neighbor traversal cursor.

use crate::types::{Edge, VertexIndex};

/// A read-only position within one vertex's adjacency list.
///
/// Obtained from [`Vertex::cursor`](super::Vertex::cursor). The cursor
/// borrows the list, so the graph cannot be mutated while it is alive.
///
/// ```
/// use keyed_graph::{DataIndex, GraphKind, KeyedGraph};
///
/// let mut graph = KeyedGraph::new(2, GraphKind::Undirected).unwrap();
/// graph.add_vertex(100, DataIndex(0));
/// graph.add_vertex(200, DataIndex(1));
/// graph.add_edge(100, 200).unwrap();
///
/// let v = graph.vertex_by_key(100).unwrap();
/// let mut cursor = v.cursor();
/// cursor.start();
/// while !cursor.at_end() {
///     assert_eq!(graph.vertex_by_index(cursor.current()).key(), 200);
///     cursor.advance();
/// }
/// ```
#[derive(Debug, Clone)]
pub struct NeighborCursor<'a> {
    /// Stored oldest-first; walked from the back.
    edges: &'a [Edge],
    /// Number of edges already passed.
    pos: usize,
}

impl<'a> NeighborCursor<'a> {
    pub(crate) fn new(edges: &'a [Edge]) -> Self {
        Self { edges, pos: 0 }
    }

    /// Rewind to the head of the list.
    pub fn start(&mut self) {
        self.pos = 0;
    }

    /// True once every neighbor has been visited, or if there are none.
    pub fn at_end(&self) -> bool {
        self.pos >= self.edges.len()
    }

    /// Move to the next neighbor.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is already at the end.
    pub fn advance(&mut self) {
        assert!(!self.at_end(), "advance() on an exhausted neighbor cursor");
        self.pos += 1;
    }

    /// The edge under the cursor.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is at the end.
    pub fn edge(&self) -> &'a Edge {
        assert!(!self.at_end(), "read from an exhausted neighbor cursor");
        &self.edges[self.edges.len() - 1 - self.pos]
    }

    /// Vertex-list index of the neighbor under the cursor.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is at the end.
    pub fn current(&self) -> VertexIndex {
        self.edge().target
    }

    /// Weight of the edge under the cursor.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is at the end.
    pub fn weight(&self) -> f64 {
        self.edge().weight
    }

    /// Neighbors not yet visited.
    pub fn remaining(&self) -> usize {
        self.edges.len().saturating_sub(self.pos)
    }
}

impl<'a> Iterator for NeighborCursor<'a> {
    type Item = &'a Edge;

    fn next(&mut self) -> Option<Self::Item> {
        if self.at_end() {
            return None;
        }
        let edge = self.edge();
        self.pos += 1;
        Some(edge)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl ExactSizeIterator for NeighborCursor<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn edges() -> Vec<Edge> {
        vec![
            Edge::weighted(VertexIndex(4), 1.0),
            Edge::weighted(VertexIndex(2), 2.0),
            Edge::weighted(VertexIndex(9), 3.0),
        ]
    }

    #[test]
    fn walks_newest_first() {
        let edges = edges();
        let mut c = NeighborCursor::new(&edges);
        let mut seen = Vec::new();
        c.start();
        while !c.at_end() {
            seen.push((c.current().as_usize(), c.weight()));
            c.advance();
        }
        assert_eq!(seen, vec![(9, 3.0), (2, 2.0), (4, 1.0)]);
    }

    #[test]
    fn restart_returns_to_head() {
        let edges = edges();
        let mut c = NeighborCursor::new(&edges);
        c.advance();
        c.advance();
        assert_eq!(c.remaining(), 1);
        c.start();
        assert_eq!(c.current(), VertexIndex(9));
    }

    #[test]
    fn independent_cursors_do_not_interfere() {
        let edges = edges();
        let mut outer = NeighborCursor::new(&edges);
        let mut visits = 0;
        while !outer.at_end() {
            let inner = NeighborCursor::new(&edges);
            assert_eq!(inner.count(), 3);
            visits += 1;
            outer.advance();
        }
        assert_eq!(visits, 3);
    }

    #[test]
    #[should_panic(expected = "exhausted")]
    fn advance_past_end_panics() {
        let mut c = NeighborCursor::new(&[]);
        c.advance();
    }

    #[test]
    #[should_panic(expected = "exhausted")]
    fn current_at_end_panics() {
        let c = NeighborCursor::new(&[]);
        let _ = c.current();
    }
}
