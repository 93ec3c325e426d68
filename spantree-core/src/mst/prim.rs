//! Prim's algorithm with a lazy binary-heap frontier.

use std::{
    cmp::{Ordering, Reverse},
    collections::BinaryHeap,
    time::{Duration, Instant},
};

use tracing::instrument;

use crate::{
    counter::OperationCounter,
    graph::{Edge, Graph},
};

use super::{MstAlgorithm, MstReport, finish};

/// A candidate tree edge waiting in the frontier.
///
/// Entries order by weight, then by push sequence, so equal weights leave the
/// heap first-in first-out.
#[derive(Clone, Copy, Debug)]
struct FrontierEntry {
    weight: f64,
    sequence: u64,
    from: usize,
    to: usize,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .total_cmp(&other.weight)
            .then_with(|| self.sequence.cmp(&other.sequence))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

#[derive(Default)]
struct Frontier {
    heap: BinaryHeap<Reverse<FrontierEntry>>,
    next_sequence: u64,
}

impl Frontier {
    fn push(&mut self, from: usize, edge: &Edge, operations: &mut OperationCounter) {
        self.heap.push(Reverse(FrontierEntry {
            weight: edge.weight(),
            sequence: self.next_sequence,
            from,
            to: edge.other(from),
        }));
        self.next_sequence += 1;
        operations.record_push();
    }

    fn pop(&mut self, operations: &mut OperationCounter) -> Option<FrontierEntry> {
        let Reverse(entry) = self.heap.pop()?;
        operations.record_pop();
        Some(entry)
    }
}

/// Computes a minimum spanning tree with Prim's algorithm, growing from
/// vertex `0`.
///
/// Stale frontier entries (whose target was reached by a cheaper edge first)
/// are discarded on pop and counted as comparisons; every neighbour scan also
/// counts as a comparison. Elapsed time covers seeding and the growth loop.
///
/// Prim only explores the component of vertex `0`, so any unreachable vertex
/// yields a failed report. A graph with no vertices trivially succeeds.
///
/// # Examples
/// ```
/// use spantree_core::{Graph, compute_prim_mst};
///
/// let graph = Graph::from_edges(3, [(0, 1, 2.0), (1, 2, 1.0), (0, 2, 5.0)])?;
/// let report = compute_prim_mst(&graph);
/// assert_eq!(report.total_cost(), 3.0);
/// assert_eq!(report.edges().len(), 2);
/// # Ok::<(), spantree_core::InvalidEdge>(())
/// ```
#[must_use]
#[instrument(
    name = "mst.prim",
    level = "debug",
    skip(graph),
    fields(vertices = graph.vertex_count(), edges = graph.edge_count()),
)]
pub fn compute_prim_mst(graph: &Graph) -> MstReport {
    let vertex_count = graph.vertex_count();
    let mut operations = OperationCounter::new();
    if vertex_count == 0 {
        return finish(
            MstAlgorithm::Prim,
            0,
            Vec::new(),
            operations,
            Duration::ZERO,
        );
    }

    let required = vertex_count - 1;
    let mut visited = vec![false; vertex_count];
    let mut tree = Vec::with_capacity(required);
    let mut frontier = Frontier::default();

    let started = Instant::now();
    visited[0] = true;
    for edge in graph.neighbours(0) {
        if !visited[edge.other(0)] {
            frontier.push(0, edge, &mut operations);
        }
    }

    while tree.len() < required {
        let Some(entry) = frontier.pop(&mut operations) else {
            break;
        };
        if visited[entry.to] {
            operations.record_comparison();
            continue;
        }
        visited[entry.to] = true;
        tree.push(Edge::from_trusted(entry.from, entry.to, entry.weight));

        for edge in graph.neighbours(entry.to) {
            operations.record_comparison();
            if !visited[edge.other(entry.to)] {
                frontier.push(entry.to, edge, &mut operations);
            }
        }
    }
    let elapsed = started.elapsed();

    finish(MstAlgorithm::Prim, vertex_count, tree, operations, elapsed)
}
