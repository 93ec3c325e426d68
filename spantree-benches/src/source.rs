//! Reproducible graph sources for the MST benchmarks.

use std::collections::HashSet;

use rand::{Rng, SeedableRng, rngs::SmallRng, seq::SliceRandom};
use spantree_core::{Graph, MstAlgorithm};
use spantree_providers_json::{GeneratorConfig, LabelIndex, SizeClass, generate_class};

use crate::{error::BenchSetupError, params::MstBenchParams};

const MAX_WEIGHT: u32 = 100;

/// Shape and seed of a random connected graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RandomGraphConfig {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Number of distinct vertex pairs joined by an edge.
    pub edge_count: usize,
    /// Seed for the graph's random number generator.
    pub seed: u64,
}

impl RandomGraphConfig {
    /// Returns the parameter label for this graph.
    #[must_use]
    pub const fn params(&self) -> MstBenchParams {
        MstBenchParams {
            vertex_count: self.vertex_count,
            edge_count: self.edge_count,
        }
    }
}

/// Builds a connected graph from a shuffled spanning path plus distinct
/// random pairs, with integer weights in `1..=100`.
///
/// # Errors
/// Returns [`BenchSetupError::ZeroValue`] for an empty graph and
/// [`BenchSetupError::EdgeCountOutOfRange`] when `edge_count` is below
/// `n - 1` or above `n (n - 1) / 2`.
///
/// # Examples
/// ```
/// use spantree_benches::source::{RandomGraphConfig, random_connected_graph};
///
/// let graph = random_connected_graph(&RandomGraphConfig {
///     vertex_count: 10,
///     edge_count: 20,
///     seed: 7,
/// })?;
/// assert_eq!(graph.edges().len(), 20);
/// # Ok::<(), spantree_benches::error::BenchSetupError>(())
/// ```
pub fn random_connected_graph(config: &RandomGraphConfig) -> Result<Graph, BenchSetupError> {
    let vertex_count = config.vertex_count;
    if vertex_count == 0 {
        return Err(BenchSetupError::ZeroValue {
            context: "vertex_count",
        });
    }
    let min = vertex_count.saturating_sub(1);
    let max = vertex_count.saturating_mul(min).checked_div(2).unwrap_or(0);
    if !(min..=max).contains(&config.edge_count) {
        return Err(BenchSetupError::EdgeCountOutOfRange {
            requested: config.edge_count,
            min,
            max,
        });
    }

    let mut rng = SmallRng::seed_from_u64(config.seed);
    let mut order: Vec<usize> = (0..vertex_count).collect();
    order.shuffle(&mut rng);

    let mut graph = Graph::new(vertex_count);
    let mut used = HashSet::with_capacity(config.edge_count);
    for pair in order.windows(2) {
        if let [u, v] = *pair {
            used.insert((u.min(v), u.max(v)));
            graph.add_edge(u, v, random_weight(&mut rng))?;
        }
    }
    while used.len() < config.edge_count {
        let u = rng.gen_range(0..vertex_count);
        let v = rng.gen_range(0..vertex_count);
        if u != v && used.insert((u.min(v), u.max(v))) {
            graph.add_edge(u, v, random_weight(&mut rng))?;
        }
    }
    Ok(graph)
}

fn random_weight(rng: &mut SmallRng) -> f64 {
    f64::from(rng.gen_range(1..=MAX_WEIGHT))
}

/// Converts every graph the JSON generator produces for `class` into a core
/// [`Graph`].
///
/// # Errors
/// Returns [`BenchSetupError::Provider`] if a generated graph fails label
/// conversion.
pub fn class_graphs(class: SizeClass, seed: u64) -> Result<Vec<Graph>, BenchSetupError> {
    generate_class(class, &GeneratorConfig { seed })
        .graphs
        .iter()
        .map(|input| {
            let labels = LabelIndex::new(&input.nodes)?;
            Ok(labels.to_graph(input)?)
        })
        .collect()
}

/// Confirms `graph` has a spanning tree, so a bench never times the
/// disconnected early exit by accident.
///
/// # Errors
/// Returns [`BenchSetupError::Mst`] when the graph is disconnected.
pub fn ensure_spanning(graph: &Graph) -> Result<(), BenchSetupError> {
    MstAlgorithm::Kruskal
        .compute(graph)
        .error()
        .map_or(Ok(()), |err| Err(BenchSetupError::Mst(err.clone())))
}
