//! Graph directedness.

use serde::{Deserialize, Serialize};

/// Whether edge insertion is one-way or symmetric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GraphKind {
    /// Inserting (a, b) also inserts (b, a) with the same weight.
    #[default]
    Undirected,
    /// Inserting (a, b) only touches a's adjacency list.
    Directed,
}

impl GraphKind {
    /// Return a human-readable name for this kind.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Undirected => "undirected",
            Self::Directed => "directed",
        }
    }

    /// Parse a graph kind from a string name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "undirected" | "graph" => Some(Self::Undirected),
            "directed" | "digraph" => Some(Self::Directed),
            _ => None,
        }
    }

    /// True if edges are inserted one-way only.
    pub fn is_directed(&self) -> bool {
        matches!(self, Self::Directed)
    }
}

impl std::fmt::Display for GraphKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
