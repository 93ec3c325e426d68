//! JSON report schema.

use serde::{Deserialize, Serialize};
use spantree_core::{Graph, MstReport};

use crate::{labels::LabelIndex, schema::InputEdge};

/// Top-level report document.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportFile {
    pub results: Vec<ResultItem>,
}

/// Comparison of both algorithms on one graph.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResultItem {
    /// 1-based position among all processed graphs.
    pub graph_id: u64,
    pub input_stats: InputStats,
    pub prim: AlgorithmOutput,
    pub kruskal: AlgorithmOutput,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputStats {
    pub vertices: usize,
    /// Distinct vertex pairs joined by at least one edge.
    pub edges: usize,
}

impl InputStats {
    #[must_use]
    pub fn of(graph: &Graph) -> Self {
        Self {
            vertices: graph.vertex_count(),
            edges: graph.edges().len(),
        }
    }
}

/// One algorithm's outcome. Successful runs fill every field but `error`;
/// failed runs fill only `error`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmOutput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mst_edges: Option<Vec<InputEdge>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_cost: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operations_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execution_time_ms: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AlgorithmOutput {
    /// Renders `report`, naming tree endpoints by their labels.
    ///
    /// Vertex ids missing from `labels` fall back to their numeric form.
    #[must_use]
    pub fn from_report(report: &MstReport, labels: &LabelIndex) -> Self {
        if let Some(error) = report.error() {
            return Self {
                error: Some(error.to_string()),
                ..Self::default()
            };
        }
        let name = |id: usize| match labels.label(id) {
            Some(label) => label.to_owned(),
            None => id.to_string(),
        };
        let edges = report
            .edges()
            .iter()
            .map(|edge| InputEdge::new(name(edge.u()), name(edge.v()), edge.weight()))
            .collect();
        Self {
            mst_edges: Some(edges),
            total_cost: Some(report.total_cost()),
            operations_count: Some(report.operation_count()),
            execution_time_ms: Some(report.elapsed_ms()),
            error: None,
        }
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.error.is_none()
    }
}
