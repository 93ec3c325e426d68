//! Determinism.
//!
//! Re-running an algorithm on the same graph must reproduce the same tree,
//! in the same order, with the same operation tallies.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::MstAlgorithm;

use super::types::{DeterminismConfig, MstFixture};

pub(super) fn run_determinism_property(fixture: &MstFixture) -> TestCaseResult {
    let config = DeterminismConfig::load();
    let graph = fixture.graph()?;

    for algorithm in MstAlgorithm::ALL {
        let baseline = algorithm.compute(&graph);
        for run in 1..=config.repetitions {
            let rerun = algorithm.compute(&graph);
            if rerun.edges() != baseline.edges() {
                return Err(TestCaseError::fail(format!(
                    "{algorithm} run {run} chose a different tree ({fixture})"
                )));
            }
            if rerun.operations() != baseline.operations() {
                return Err(TestCaseError::fail(format!(
                    "{algorithm} run {run} counted {:?}, first run {:?} ({fixture})",
                    rerun.operations(),
                    baseline.operations()
                )));
            }
            if rerun.error() != baseline.error() {
                return Err(TestCaseError::fail(format!(
                    "{algorithm} run {run} changed outcome ({fixture})"
                )));
            }
        }
    }
    Ok(())
}
