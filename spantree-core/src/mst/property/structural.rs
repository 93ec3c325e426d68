//! Structural invariants.
//!
//! A successful report must hold exactly `n - 1` edges drawn from the input
//! that join every vertex without a cycle, with a cost equal to their sum.
//! A failed report must be empty with zero cost.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::test_utils::{COST_TOLERANCE, spanning_tree_violation};
use crate::{Edge, Graph, MstAlgorithm, MstReport};

use super::types::MstFixture;

pub(super) fn run_structural_invariants_property(fixture: &MstFixture) -> TestCaseResult {
    let graph = fixture.graph()?;
    for algorithm in MstAlgorithm::ALL {
        let report = algorithm.compute(&graph);
        if report.algorithm() != algorithm {
            return Err(TestCaseError::fail(format!(
                "{algorithm} report labelled {} ({fixture})",
                report.algorithm()
            )));
        }
        if report.success() {
            validate_tree(&graph, &report, fixture)?;
        } else {
            validate_failure(&report, fixture)?;
        }
    }
    Ok(())
}

fn validate_tree(graph: &Graph, report: &MstReport, fixture: &MstFixture) -> TestCaseResult {
    let algorithm = report.algorithm();
    if let Some(violation) = spanning_tree_violation(graph.vertex_count(), report.edges()) {
        return Err(TestCaseError::fail(format!(
            "{algorithm}: {violation} ({fixture})"
        )));
    }
    for edge in report.edges() {
        if !edge.weight().is_finite() {
            return Err(TestCaseError::fail(format!(
                "{algorithm}: non-finite weight on {edge:?} ({fixture})"
            )));
        }
        let present = graph.neighbours(edge.u()).iter().any(|candidate| {
            candidate.other(edge.u()) == edge.v()
                && candidate.weight().to_bits() == edge.weight().to_bits()
        });
        if !present {
            return Err(TestCaseError::fail(format!(
                "{algorithm}: {edge:?} is not an input edge ({fixture})"
            )));
        }
    }
    let summed: f64 = report.edges().iter().map(Edge::weight).sum();
    if (summed - report.total_cost()).abs() > COST_TOLERANCE {
        return Err(TestCaseError::fail(format!(
            "{algorithm}: cost {} differs from edge sum {summed} ({fixture})",
            report.total_cost()
        )));
    }
    Ok(())
}

fn validate_failure(report: &MstReport, fixture: &MstFixture) -> TestCaseResult {
    let algorithm = report.algorithm();
    if !report.edges().is_empty() || report.total_cost() != 0.0 {
        return Err(TestCaseError::fail(format!(
            "{algorithm}: failed report kept {} edges and cost {} ({fixture})",
            report.edges().len(),
            report.total_cost()
        )));
    }
    match report.error() {
        Some(error) if error.algorithm() == algorithm && !error.to_string().is_empty() => Ok(()),
        other => Err(TestCaseError::fail(format!(
            "{algorithm}: unexpected failure detail {other:?} ({fixture})"
        ))),
    }
}
