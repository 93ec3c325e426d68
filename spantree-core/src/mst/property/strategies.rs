//! Graph generation strategies for MST property-based tests.
//!
//! Every generator is driven by a seeded [`SmallRng`] so that a failing
//! proptest case can be replayed through the rstest cases by seed alone.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::types::{MstFixture, WeightDistribution};

const MIN_VERTICES: usize = 8;
const MAX_VERTICES: usize = 64;
/// Dense graphs stay small to bound the quadratic edge count.
const DENSE_MAX_VERTICES: usize = 32;
const MIN_WEIGHT: f64 = 0.1;
const MAX_WEIGHT: f64 = 100.0;

/// Generates fixtures across every weight distribution.
pub(super) fn mst_fixture_strategy() -> impl Strategy<Value = MstFixture> {
    (any::<WeightDistribution>(), any::<u64>()).prop_map(|(distribution, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(distribution, &mut rng)
    })
}

/// Generates a fixture for one explicit distribution.
pub(super) fn generate_fixture(distribution: WeightDistribution, rng: &mut SmallRng) -> MstFixture {
    match distribution {
        WeightDistribution::Unique => {
            let edges = EdgeBuilder::random_pairs(rng, MAX_VERTICES, (0.2, 0.6), continuous_weight);
            edges.into_fixture(distribution)
        }
        WeightDistribution::ManyIdentical => generate_identical_weights(rng),
        WeightDistribution::Sparse => generate_sparse(rng),
        WeightDistribution::Dense => {
            let edges =
                EdgeBuilder::random_pairs(rng, DENSE_MAX_VERTICES, (0.7, 0.95), continuous_weight);
            edges.into_fixture(distribution)
        }
        WeightDistribution::Disconnected => generate_disconnected(rng),
        WeightDistribution::Parallel => generate_parallel(rng),
    }
}

fn continuous_weight(rng: &mut SmallRng) -> f64 {
    rng.gen_range(MIN_WEIGHT..MAX_WEIGHT)
}

/// Accumulates `(u, v, weight)` triples for a fixture.
struct EdgeBuilder {
    vertex_count: usize,
    edges: Vec<(usize, usize, f64)>,
}

impl EdgeBuilder {
    fn with_vertices(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            edges: Vec::new(),
        }
    }

    /// Adds each unordered pair with a probability sampled from
    /// `probability_range`, then guarantees at least one edge.
    fn random_pairs(
        rng: &mut SmallRng,
        max_vertices: usize,
        probability_range: (f64, f64),
        mut weight: impl FnMut(&mut SmallRng) -> f64,
    ) -> Self {
        let vertex_count = rng.gen_range(MIN_VERTICES..=max_vertices);
        let probability = rng.gen_range(probability_range.0..=probability_range.1);
        let mut builder = Self::with_vertices(vertex_count);
        builder.add_component(0, vertex_count, probability, rng, &mut weight);
        builder
    }

    fn push(&mut self, u: usize, v: usize, weight: f64) {
        self.edges.push((u, v, weight));
    }

    /// Adds random edges among `offset..offset + size`. Components of two or
    /// more vertices always receive at least one edge.
    fn add_component(
        &mut self,
        offset: usize,
        size: usize,
        probability: f64,
        rng: &mut SmallRng,
        weight: &mut impl FnMut(&mut SmallRng) -> f64,
    ) {
        let start = self.edges.len();
        for i in 0..size {
            for j in (i + 1)..size {
                if rng.gen_bool(probability) {
                    let w = weight(rng);
                    self.push(offset + i, offset + j, w);
                }
            }
        }
        if size >= 2 && self.edges.len() == start {
            let w = weight(rng);
            self.push(offset, offset + 1, w);
        }
    }

    /// Links every vertex along a random permutation, guaranteeing
    /// connectivity.
    fn add_random_path(
        &mut self,
        rng: &mut SmallRng,
        weight: &mut impl FnMut(&mut SmallRng) -> f64,
    ) {
        let mut order: Vec<usize> = (0..self.vertex_count).collect();
        shuffle(&mut order, rng);
        for pair in order.windows(2) {
            let w = weight(rng);
            self.push(pair[0], pair[1], w);
        }
    }

    fn into_fixture(self, distribution: WeightDistribution) -> MstFixture {
        MstFixture {
            vertex_count: self.vertex_count,
            edges: self.edges,
            distribution,
        }
    }
}

fn generate_identical_weights(rng: &mut SmallRng) -> MstFixture {
    let pool_size = rng.gen_range(1..=3);
    let pool: Vec<f64> = (0..pool_size)
        .map(|_| f64::from(rng.gen_range(1_u8..=10)))
        .collect();
    let pick = move |r: &mut SmallRng| pool[r.gen_range(0..pool.len())];
    let edges = EdgeBuilder::random_pairs(rng, MAX_VERTICES, (0.3, 0.7), pick);
    edges.into_fixture(WeightDistribution::ManyIdentical)
}

fn generate_sparse(rng: &mut SmallRng) -> MstFixture {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let mut builder = EdgeBuilder::with_vertices(vertex_count);
    builder.add_random_path(rng, &mut continuous_weight);

    let extra = rng.gen_range(vertex_count / 2..=vertex_count);
    for _ in 0..extra {
        let u = rng.gen_range(0..vertex_count);
        let v = rng.gen_range(0..vertex_count);
        if u != v {
            let w = continuous_weight(rng);
            builder.push(u, v, w);
        }
    }
    builder.into_fixture(WeightDistribution::Sparse)
}

fn generate_disconnected(rng: &mut SmallRng) -> MstFixture {
    let component_count = rng.gen_range(2..=5);
    let sizes: Vec<usize> = (0..component_count)
        .map(|_| rng.gen_range(3..=12))
        .collect();
    let mut builder = EdgeBuilder::with_vertices(sizes.iter().sum());
    let mut offset = 0;
    for size in sizes {
        let probability = rng.gen_range(0.3..=0.8);
        builder.add_component(offset, size, probability, rng, &mut continuous_weight);
        offset += size;
    }
    builder.into_fixture(WeightDistribution::Disconnected)
}

/// Random path plus bundles of one to four parallel copies, written in both
/// orientations and with independent weights.
fn generate_parallel(rng: &mut SmallRng) -> MstFixture {
    let vertex_count = rng.gen_range(4..=24);
    let mut builder = EdgeBuilder::with_vertices(vertex_count);
    builder.add_random_path(rng, &mut continuous_weight);

    let bundles = rng.gen_range(vertex_count..=vertex_count * 2);
    for _ in 0..bundles {
        let u = rng.gen_range(0..vertex_count);
        let v = rng.gen_range(0..vertex_count);
        if u == v {
            continue;
        }
        for _ in 0..rng.gen_range(1..=4) {
            let w = continuous_weight(rng);
            if rng.gen_bool(0.5) {
                builder.push(u, v, w);
            } else {
                builder.push(v, u, w);
            }
        }
    }
    builder.into_fixture(WeightDistribution::Parallel)
}

/// Fisher-Yates shuffle.
fn shuffle(slice: &mut [usize], rng: &mut SmallRng) {
    for i in (1..slice.len()).rev() {
        let j = rng.gen_range(0..=i);
        slice.swap(i, j);
    }
}

// Hand-written so the tie-heavy and multigraph families are sampled more
// often than the others.
impl proptest::arbitrary::Arbitrary for WeightDistribution {
    type Parameters = ();
    type Strategy = proptest::strategy::TupleUnion<(
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
    )>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            2 => Just(Self::Unique),
            3 => Just(Self::ManyIdentical),
            2 => Just(Self::Sparse),
            2 => Just(Self::Dense),
            2 => Just(Self::Disconnected),
            3 => Just(Self::Parallel),
        ]
    }
}
