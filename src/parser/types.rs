//! On-disk graph description.
//!
//! ```json
//! {
//!     "name": "path",
//!     "directed": false,
//!     "vertices": ["A", "B", "C"],
//!     "edges": [["A", "B"], ["B", "C"]]
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::graph::GraphKind;

/// A graph as written in a JSON graph file.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct GraphFile {
    /// Optional display name used in reports.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Whether edges are directed (`false` when omitted).
    #[serde(default)]
    pub directed: bool,

    /// Vertex labels. Must be unique and non-empty.
    #[serde(default)]
    pub vertices: Vec<String>,

    /// Edges as `[from, to]` label pairs.
    #[serde(default)]
    pub edges: Vec<(String, String)>,
}

impl GraphFile {
    /// The graph kind implied by the `directed` flag.
    pub fn kind(&self) -> GraphKind {
        if self.directed {
            GraphKind::Directed
        } else {
            GraphKind::Undirected
        }
    }

    /// The display name, or `"unnamed"`.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("unnamed")
    }
}
