use std::{io, path::PathBuf};

use spantree_core::InvalidEdge;
use thiserror::Error;

/// Errors raised while loading, converting or writing JSON graph data.
#[derive(Debug, Error)]
pub enum JsonProviderError {
    #[error("failed to access `{path}`: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid graph JSON in `{path}`: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode JSON: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("duplicate vertex label `{label}`")]
    DuplicateLabel { label: String },
    #[error("graph {graph_id}: edge references unknown vertex `{label}`")]
    UnknownLabel { graph_id: u64, label: String },
    #[error("unknown size class `{name}`; expected small, medium, large or extra")]
    UnknownSizeClass { name: String },
    #[error("graph {graph_id}: {source}")]
    InvalidEdge {
        graph_id: u64,
        #[source]
        source: InvalidEdge,
    },
}
