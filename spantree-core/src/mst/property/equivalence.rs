//! Oracle equivalence.
//!
//! On a connected graph both algorithms must succeed with the oracle's total
//! weight; on a disconnected graph both must fail.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::MstAlgorithm;

use super::oracle::minimum_spanning_forest;
use super::types::MstFixture;

/// Relative tolerance; algorithms sum the same weights in different orders.
const RELATIVE_TOLERANCE: f64 = 1e-9;

pub(super) fn run_oracle_equivalence_property(fixture: &MstFixture) -> TestCaseResult {
    let graph = fixture.graph()?;
    let oracle = minimum_spanning_forest(fixture.vertex_count, &fixture.edges);

    for algorithm in MstAlgorithm::ALL {
        let report = algorithm.compute(&graph);
        if !oracle.is_connected() {
            if report.success() {
                return Err(TestCaseError::fail(format!(
                    "{algorithm} succeeded on a graph with {} components ({fixture})",
                    oracle.component_count
                )));
            }
            continue;
        }

        if let Some(error) = report.error() {
            return Err(TestCaseError::fail(format!(
                "{algorithm} failed on a connected graph: {error} ({fixture})"
            )));
        }
        if report.edges().len() != oracle.edge_count {
            return Err(TestCaseError::fail(format!(
                "{algorithm} edge count mismatch: got {}, oracle {} ({fixture})",
                report.edges().len(),
                oracle.edge_count
            )));
        }
        let tolerance = RELATIVE_TOLERANCE * oracle.total_weight.abs().max(1.0);
        if (report.total_cost() - oracle.total_weight).abs() > tolerance {
            return Err(TestCaseError::fail(format!(
                "{algorithm} total weight mismatch: got {}, oracle {} ({fixture})",
                report.total_cost(),
                oracle.total_weight
            )));
        }
    }
    Ok(())
}
