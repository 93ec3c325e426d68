//! Property-based tests for the Kruskal and Prim implementations.
//!
//! Both algorithms are checked against a dense minimum-spanning-forest
//! oracle, against the structural definition of a spanning tree, and for
//! run-to-run determinism, across graph families with varied weight
//! distributions.

mod determinism;
mod equivalence;
mod oracle;
mod strategies;
mod structural;
