//! Serde types for the graph input files.

use serde::{Deserialize, Serialize};

/// A file holding one or more labelled graphs.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphFile {
    pub graphs: Vec<InputGraph>,
}

/// One labelled graph.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InputGraph {
    pub id: u64,
    /// Vertex labels; position is the dense vertex id.
    pub nodes: Vec<String>,
    pub edges: Vec<InputEdge>,
}

/// An undirected weighted edge between two labels.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InputEdge {
    pub from: String,
    pub to: String,
    pub weight: f64,
}

impl InputEdge {
    /// Creates an edge between two labels.
    #[must_use]
    pub fn new(from: impl Into<String>, to: impl Into<String>, weight: f64) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            weight,
        }
    }
}
