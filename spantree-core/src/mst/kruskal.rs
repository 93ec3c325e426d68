//! Kruskal's algorithm.

use std::time::Instant;

use tracing::instrument;

use crate::{counter::OperationCounter, graph::Graph};

use super::{DisjointSet, MstAlgorithm, MstReport, finish};

/// Computes a minimum spanning tree with Kruskal's algorithm.
///
/// Every edge, parallel copies included, is stably sorted by weight so equal
/// weights keep insertion order and repeated runs pick the same tree. Edges
/// joining two different components are accepted until `n - 1` have been
/// taken.
///
/// The operation count is the number of sort comparisons plus every
/// disjoint-set find and union. Elapsed time covers the sort and the
/// union-find pass, not the initial copy of the edge list.
///
/// Graphs with zero or one vertex trivially succeed with an empty tree.
/// A graph with more than one component yields a failed report.
///
/// # Examples
/// ```
/// use spantree_core::{Graph, compute_kruskal_mst};
///
/// let graph = Graph::from_edges(4, [(0, 1, 1.0), (2, 3, 1.0)])?;
/// let report = compute_kruskal_mst(&graph);
/// assert!(!report.success());
/// assert!(report.edges().is_empty());
/// # Ok::<(), spantree_core::InvalidEdge>(())
/// ```
#[must_use]
#[instrument(
    name = "mst.kruskal",
    level = "debug",
    skip(graph),
    fields(vertices = graph.vertex_count(), edges = graph.edge_count()),
)]
pub fn compute_kruskal_mst(graph: &Graph) -> MstReport {
    let vertex_count = graph.vertex_count();
    let required = vertex_count.saturating_sub(1);
    let mut candidates = graph.all_edges().to_vec();
    let mut operations = OperationCounter::new();

    let started = Instant::now();
    candidates.sort_by(|left, right| {
        operations.record_comparison();
        left.weight().total_cmp(&right.weight())
    });

    let mut components = DisjointSet::new(vertex_count);
    let mut tree = Vec::with_capacity(required);
    for edge in candidates {
        if tree.len() == required {
            break;
        }
        let u_root = components.find(edge.u());
        let v_root = components.find(edge.v());
        if u_root != v_root && components.union(u_root, v_root) {
            tree.push(edge);
        }
    }
    let elapsed = started.elapsed();

    operations.record_finds(components.finds());
    operations.record_unions(components.unions());
    finish(
        MstAlgorithm::Kruskal,
        vertex_count,
        tree,
        operations,
        elapsed,
    )
}
