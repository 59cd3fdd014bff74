//! Index newtypes.
//!
//! A vertex position and an external-table position are both plain
//! integers underneath; keeping them as separate types stops one being
//! passed where the other is expected.

use std::fmt;

use serde::Serialize;

/// Position of a vertex in a graph's vertex list.
///
/// Only meaningful for the graph that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct VertexIndex(pub usize);

impl VertexIndex {
    pub fn as_usize(self) -> usize {
        self.0
    }
}

impl From<usize> for VertexIndex {
    fn from(value: usize) -> Self {
        Self(value)
    }
}

impl fmt::Display for VertexIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// Position of a record in the caller's external data table.
///
/// The graph stores it and hands it back; it never dereferences it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct DataIndex(pub usize);

impl DataIndex {
    pub fn as_usize(self) -> usize {
        self.0
    }
}

impl From<usize> for DataIndex {
    fn from(value: usize) -> Self {
        Self(value)
    }
}

impl fmt::Display for DataIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
