//! Benchmark parameter types.

use std::fmt;

/// Shape of one benchmark graph, used as the Criterion parameter label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MstBenchParams {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Number of undirected edges.
    pub edge_count: usize,
}

impl fmt::Display for MstBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},m={}", self.vertex_count, self.edge_count)
    }
}
