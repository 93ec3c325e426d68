//! Benchmark support for spantree.
//!
//! Builds reproducible graphs for the Criterion benches that compare Kruskal
//! and Prim: random connected graphs of a chosen edge count, and the size
//! classes produced by the JSON provider's generator.

pub mod error;
pub mod params;
pub mod source;
