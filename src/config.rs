//! Graph creation parameters.
//!
//! ```json
//! { "capacity": 7, "kind": "undirected" }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::types::{GraphError, GraphKind, GraphResult};

/// Parameters fixed at graph creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Maximum number of vertices.
    pub capacity: usize,
    /// Directedness; undirected when omitted.
    #[serde(default)]
    pub kind: GraphKind,
}

impl GraphConfig {
    pub fn new(capacity: usize, kind: GraphKind) -> Self {
        Self { capacity, kind }
    }

    /// Parse and validate a JSON document.
    pub fn from_json(json: &str) -> GraphResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> GraphResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        log::debug!("loaded graph config from {}", path.display());
        Self::from_json(&text)
    }

    pub fn validate(&self) -> GraphResult<()> {
        if self.capacity == 0 {
            return Err(GraphError::InvalidConfig(
                "capacity must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}
