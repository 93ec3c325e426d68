//! Minimum spanning tree construction.
//!
//! Two sequential algorithms share one result type so their output can be
//! cross-checked: Kruskal sorts every edge and merges components through a
//! [`DisjointSet`], Prim grows a tree from vertex `0` through a min-heap
//! frontier. Both are pure functions of a borrowed [`Graph`].

mod kruskal;
mod prim;
mod union_find;

use std::{fmt, time::Duration};

use tracing::debug;

use crate::{
    counter::OperationCounter,
    error::MstError,
    graph::{Edge, Graph},
};

pub use self::kruskal::compute_kruskal_mst;
pub use self::prim::compute_prim_mst;
pub use self::union_find::DisjointSet;

/// The MST algorithms offered by this crate.
///
/// # Examples
/// ```
/// use spantree_core::{Graph, MstAlgorithm};
///
/// let graph = Graph::from_edges(2, [(0, 1, 7.0)])?;
/// for algorithm in MstAlgorithm::ALL {
///     assert_eq!(algorithm.compute(&graph).total_cost(), 7.0);
/// }
/// # Ok::<(), spantree_core::InvalidEdge>(())
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum MstAlgorithm {
    /// Edge sorting plus union-find.
    Kruskal,
    /// Priority-queue frontier growth from vertex `0`.
    Prim,
}

impl MstAlgorithm {
    /// Every algorithm, in reporting order.
    pub const ALL: [Self; 2] = [Self::Prim, Self::Kruskal];

    /// Runs this algorithm on `graph`.
    #[must_use]
    pub fn compute(self, graph: &Graph) -> MstReport {
        match self {
            Self::Kruskal => compute_kruskal_mst(graph),
            Self::Prim => compute_prim_mst(graph),
        }
    }

    /// Returns the lowercase identifier used in logs and metric labels.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Kruskal => "kruskal",
            Self::Prim => "prim",
        }
    }
}

impl fmt::Display for MstAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Kruskal => "Kruskal",
            Self::Prim => "Prim",
        })
    }
}

/// Outcome of one MST computation.
///
/// On success the edges form a spanning tree with `vertex_count - 1` edges.
/// On failure the edge list is empty, the cost is zero and
/// [`MstReport::error`] explains why; the operation tallies and elapsed time
/// gathered before the failure are still reported.
#[derive(Clone, Debug, PartialEq)]
pub struct MstReport {
    algorithm: MstAlgorithm,
    edges: Vec<Edge>,
    total_cost: f64,
    operations: OperationCounter,
    elapsed: Duration,
    error: Option<MstError>,
}

impl MstReport {
    /// Returns the algorithm that produced the report.
    #[must_use]
    #[rustfmt::skip]
    pub const fn algorithm(&self) -> MstAlgorithm { self.algorithm }

    /// Returns the tree edges in the order they were accepted.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Returns the sum of the tree edge weights.
    #[must_use]
    #[rustfmt::skip]
    pub const fn total_cost(&self) -> f64 { self.total_cost }

    /// Returns the detailed operation tallies.
    #[must_use]
    #[rustfmt::skip]
    pub const fn operations(&self) -> &OperationCounter { &self.operations }

    /// Returns the total operation count.
    #[must_use]
    pub const fn operation_count(&self) -> u64 {
        self.operations.total()
    }

    /// Returns the wall-clock time spent in the algorithm proper.
    #[must_use]
    #[rustfmt::skip]
    pub const fn elapsed(&self) -> Duration { self.elapsed }

    /// Returns the elapsed time in fractional milliseconds.
    #[must_use]
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1_000.0
    }

    /// Returns `true` when a spanning tree was found.
    #[must_use]
    pub const fn success(&self) -> bool {
        self.error.is_none()
    }

    /// Returns the failure, if any.
    #[must_use]
    pub const fn error(&self) -> Option<&MstError> {
        self.error.as_ref()
    }
}

/// Builds the report for a finished run and emits its diagnostics.
fn finish(
    algorithm: MstAlgorithm,
    vertex_count: usize,
    tree: Vec<Edge>,
    operations: OperationCounter,
    elapsed: Duration,
) -> MstReport {
    let required = vertex_count.saturating_sub(1);
    let report = if tree.len() < required {
        let error = MstError::Disconnected {
            algorithm,
            found: tree.len(),
            required,
        };
        debug!(
            algorithm = algorithm.as_str(),
            found = tree.len(),
            required,
            code = error.code().as_str(),
            "no spanning tree exists",
        );
        MstReport {
            algorithm,
            edges: Vec::new(),
            total_cost: 0.0,
            operations,
            elapsed,
            error: Some(error),
        }
    } else {
        let total_cost = tree.iter().map(Edge::weight).sum();
        debug!(
            algorithm = algorithm.as_str(),
            edges = tree.len(),
            total_cost,
            operations = operations.total(),
            elapsed = ?elapsed,
            "spanning tree complete",
        );
        MstReport {
            algorithm,
            edges: tree,
            total_cost,
            operations,
            elapsed,
            error: None,
        }
    };
    record_metrics(&report);
    report
}

#[cfg(feature = "metrics")]
fn record_metrics(report: &MstReport) {
    let label = report.algorithm.as_str();
    metrics::counter!("mst_operations_total", "algorithm" => label)
        .increment(report.operation_count());
    metrics::histogram!("mst_execution_seconds", "algorithm" => label)
        .record(report.elapsed.as_secs_f64());
    if !report.success() {
        metrics::counter!("mst_disconnected_total", "algorithm" => label).increment(1);
    }
}

#[cfg(not(feature = "metrics"))]
const fn record_metrics(_report: &MstReport) {}

#[cfg(test)]
mod property;
