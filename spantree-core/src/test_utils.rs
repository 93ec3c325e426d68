//! Shared test utilities for `spantree-core`.

use std::collections::BTreeSet;

use proptest::test_runner::Config as ProptestConfig;
use spantree_test_support::ci::property_test_profile::ProptestRunProfile;

use crate::{DisjointSet, Edge, Graph, MstReport};

/// Tolerance used when comparing MST costs from different algorithms.
pub(crate) const COST_TOLERANCE: f64 = 1e-6;

/// Builds a standard proptest configuration from the shared CI profile.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Checks that `edges` form a spanning tree of `vertex_count` vertices.
///
/// Replays the edges through a fresh [`DisjointSet`]: every union must merge
/// two sets and a single set must remain at the end.
pub(crate) fn spanning_tree_violation(vertex_count: usize, edges: &[Edge]) -> Option<String> {
    if edges.len() != vertex_count.saturating_sub(1) {
        return Some(format!(
            "expected {} edges, found {}",
            vertex_count.saturating_sub(1),
            edges.len()
        ));
    }
    let mut sets = DisjointSet::new(vertex_count);
    for (index, edge) in edges.iter().enumerate() {
        if edge.u() >= vertex_count || edge.v() >= vertex_count {
            return Some(format!(
                "edge {index} references a missing vertex: {edge:?}"
            ));
        }
        if !sets.union(edge.u(), edge.v()) {
            return Some(format!("edge {index} closes a cycle: {edge:?}"));
        }
    }
    if vertex_count > 0 && sets.component_count() != 1 {
        return Some(format!("tree leaves {} components", sets.component_count()));
    }
    None
}

/// Panics unless `report` holds a spanning tree of `graph` built from the
/// graph's own edges.
pub(crate) fn assert_spanning_tree(graph: &Graph, report: &MstReport) {
    assert!(
        report.success(),
        "{} failed: {:?}",
        report.algorithm(),
        report.error()
    );
    if let Some(violation) = spanning_tree_violation(graph.vertex_count(), report.edges()) {
        panic!(
            "{} output is not a spanning tree: {violation}",
            report.algorithm()
        );
    }
    for edge in report.edges() {
        assert!(
            graph.all_edges().iter().any(|candidate| {
                candidate.endpoints_sorted() == edge.endpoints_sorted()
                    && candidate.weight().to_bits() == edge.weight().to_bits()
            }),
            "{} invented edge {edge:?}",
            report.algorithm()
        );
    }
    let summed: f64 = report.edges().iter().map(Edge::weight).sum();
    assert!((summed - report.total_cost()).abs() < COST_TOLERANCE);
}

/// Returns the tree as a set of `(min, max, weight bits)` triples.
pub(crate) fn undirected_edge_set(edges: &[Edge]) -> BTreeSet<(usize, usize, u64)> {
    edges
        .iter()
        .map(|edge| {
            let (low, high) = edge.endpoints_sorted();
            (low, high, edge.weight().to_bits())
        })
        .collect()
}
