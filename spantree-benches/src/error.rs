//! Benchmark setup error type.

use spantree_core::{InvalidEdge, MstError};
use spantree_providers_json::JsonProviderError;

/// Errors raised while preparing benchmark graphs.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// A generated edge was rejected by the graph.
    #[error("graph construction failed: {0}")]
    Graph(#[from] InvalidEdge),
    /// Converting a generated labelled graph failed.
    #[error("provider graph conversion failed: {0}")]
    Provider(#[from] JsonProviderError),
    /// A benchmark graph turned out to have no spanning tree.
    #[error("benchmark graph has no spanning tree: {0}")]
    Mst(#[from] MstError),
    /// A zero value was passed where a non-zero integer was required.
    #[error("expected a non-zero value for {context}")]
    ZeroValue {
        /// Parameter that was zero.
        context: &'static str,
    },
    /// The requested edge count cannot be met without repeating pairs, or is
    /// too small to connect every vertex.
    #[error("edge count {requested} is outside {min}..={max} for this vertex count")]
    EdgeCountOutOfRange {
        /// Edge count asked for.
        requested: usize,
        /// Edges of a spanning path.
        min: usize,
        /// Edges of the complete graph.
        max: usize,
    },
}
