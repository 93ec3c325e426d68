//! Runs both algorithms on one input graph.

use spantree_core::{MstAlgorithm, MstReport};
use tracing::instrument;

use crate::{
    errors::JsonProviderError,
    labels::LabelIndex,
    report::{AlgorithmOutput, InputStats, ResultItem},
    schema::InputGraph,
    summary::SummaryRow,
};

/// Both algorithms' reports for one graph, with their rendered forms.
#[derive(Clone, Debug)]
pub struct Evaluation {
    pub prim: MstReport,
    pub kruskal: MstReport,
    /// Report entry, edges labelled with the input's node names.
    pub result: ResultItem,
    /// CSV line for the same graph.
    pub summary: SummaryRow,
}

impl Evaluation {
    /// Returns `true` when both algorithms produced the same cost, or both
    /// failed.
    #[must_use]
    pub fn costs_agree(&self, tolerance: f64) -> bool {
        match (self.prim.success(), self.kruskal.success()) {
            (true, true) => (self.prim.total_cost() - self.kruskal.total_cost()).abs() <= tolerance,
            (false, false) => true,
            _ => false,
        }
    }
}

/// Converts `input`, runs Prim then Kruskal, and renders the results under
/// `graph_id`.
///
/// # Errors
/// Returns an error when the graph's labels or edges are invalid.
#[instrument(
    name = "json.evaluate",
    level = "debug",
    skip(input),
    fields(source_id = input.id, vertices = input.nodes.len()),
)]
pub fn evaluate_graph(graph_id: u64, input: &InputGraph) -> Result<Evaluation, JsonProviderError> {
    let labels = LabelIndex::new(&input.nodes)?;
    let graph = labels.to_graph(input)?;
    let stats = InputStats::of(&graph);

    let prim = MstAlgorithm::Prim.compute(&graph);
    let kruskal = MstAlgorithm::Kruskal.compute(&graph);

    let result = ResultItem {
        graph_id,
        input_stats: stats,
        prim: AlgorithmOutput::from_report(&prim, &labels),
        kruskal: AlgorithmOutput::from_report(&kruskal, &labels),
    };
    let summary = SummaryRow::new(graph_id, stats, &prim, &kruskal);
    Ok(Evaluation {
        prim,
        kruskal,
        result,
        summary,
    })
}
