//! Spantree core library.
//!
//! Computes minimum spanning trees of weighted undirected graphs with
//! Kruskal's and Prim's algorithms and reports cost, operation counts and
//! elapsed time for each so the two can be compared.
//!
//! # Example
//! ```
//! use spantree_core::{Graph, compute_kruskal_mst, compute_prim_mst};
//!
//! let graph = Graph::from_edges(3, [(0, 1, 1.0), (1, 2, 2.0), (0, 2, 4.0)])?;
//! let kruskal = compute_kruskal_mst(&graph);
//! let prim = compute_prim_mst(&graph);
//! assert!(kruskal.success() && prim.success());
//! assert_eq!(kruskal.total_cost(), 3.0);
//! assert_eq!(prim.total_cost(), 3.0);
//! # Ok::<(), spantree_core::InvalidEdge>(())
//! ```
//!
//! # Metrics
//!
//! When the `metrics` feature is enabled every computation emits:
//!
//! - `mst_operations_total` (counter, label `algorithm`)
//! - `mst_execution_seconds` (histogram, label `algorithm`)
//! - `mst_disconnected_total` (counter, label `algorithm`)
#![cfg_attr(docsrs, feature(doc_cfg))]

mod counter;
mod error;
mod graph;
mod mst;
#[cfg(test)]
mod test_utils;

pub use crate::{
    counter::OperationCounter,
    error::{InvalidEdge, InvalidEdgeCode, MstError, MstErrorCode},
    graph::{Edge, Graph},
    mst::{DisjointSet, MstAlgorithm, MstReport, compute_kruskal_mst, compute_prim_mst},
};
