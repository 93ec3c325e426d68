//! Seeded synthetic graph generation.
//!
//! Graphs come in four size classes. Each graph is connected: a shuffled
//! path visits every vertex before random extra pairs are added up to the
//! drawn density. Weights are integers in `1..=100`.

use std::{
    collections::HashSet,
    fmt, fs,
    ops::Range,
    path::{Path, PathBuf},
    str::FromStr,
};

use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};
use tracing::{debug, instrument};

use crate::{
    errors::JsonProviderError,
    io::write_graph_file,
    labels::alphabet_label,
    schema::{GraphFile, InputEdge, InputGraph},
};

/// Seed offset between consecutive size classes.
const CLASS_SEED_STRIDE: u64 = 101;
const MAX_WEIGHT: u32 = 100;
/// Name of the file holding every generated graph.
pub const COMBINED_FILE: &str = "combined_graphs.json";

/// Generator settings.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GeneratorConfig {
    /// Base seed; class `i` is seeded with `seed + 101 * i`.
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self { seed: 101 }
    }
}

impl GeneratorConfig {
    fn class_seed(self, class: SizeClass) -> u64 {
        self.seed
            .wrapping_add(CLASS_SEED_STRIDE.wrapping_mul(class.ordinal()))
    }
}

/// A group of graph sizes sharing a density range.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum SizeClass {
    Small,
    Medium,
    Large,
    Extra,
}

impl SizeClass {
    pub const ALL: [Self; 4] = [Self::Small, Self::Medium, Self::Large, Self::Extra];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
            Self::Extra => "extra",
        }
    }

    /// Vertex counts of the graphs in this class, in generation order.
    #[must_use]
    pub const fn sizes(self) -> &'static [usize] {
        match self {
            Self::Small => &[10, 15, 20, 25, 30],
            Self::Medium => &[50, 75, 100, 125, 150, 175, 200, 225, 250, 300],
            Self::Large => &[400, 450, 500, 550, 600, 650, 700, 800, 900, 1000],
            Self::Extra => &[1300, 1600, 2000, 2300, 2600],
        }
    }

    /// Range the per-graph edge density is drawn from.
    #[must_use]
    pub const fn density_range(self) -> Range<f64> {
        match self {
            Self::Small => 0.40..0.70,
            Self::Medium => 0.20..0.50,
            Self::Large => 0.05..0.15,
            Self::Extra => 0.02..0.08,
        }
    }

    /// File name the class is written to.
    #[must_use]
    pub fn file_name(self) -> String {
        format!("{}_graphs.json", self.name())
    }

    const fn ordinal(self) -> u64 {
        match self {
            Self::Small => 0,
            Self::Medium => 1,
            Self::Large => 2,
            Self::Extra => 3,
        }
    }
}

impl fmt::Display for SizeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SizeClass {
    type Err = JsonProviderError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let wanted = raw.trim();
        Self::ALL
            .into_iter()
            .find(|class| class.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| JsonProviderError::UnknownSizeClass {
                name: raw.to_owned(),
            })
    }
}

/// Generates every graph of `class`, with ids starting at 1.
#[must_use]
#[instrument(name = "json.generate", level = "debug", skip(config), fields(seed = config.seed))]
pub fn generate_class(class: SizeClass, config: &GeneratorConfig) -> GraphFile {
    let mut rng = StdRng::seed_from_u64(config.class_seed(class));
    let graphs = (1..)
        .zip(class.sizes())
        .map(|(id, &size)| {
            let density = rng.gen_range(class.density_range());
            generate_graph(id, size, density, &mut rng)
        })
        .collect();
    GraphFile { graphs }
}

fn generate_graph(id: u64, vertex_count: usize, density: f64, rng: &mut StdRng) -> InputGraph {
    let nodes: Vec<String> = (0..vertex_count).map(alphabet_label).collect();
    let max_edges = vertex_count * vertex_count.saturating_sub(1) / 2;
    let target = ((density * max_edges as f64).round() as usize)
        .max(vertex_count.saturating_sub(1))
        .min(max_edges);

    let mut order: Vec<usize> = (0..vertex_count).collect();
    order.shuffle(rng);

    let mut edges = EdgeSet::with_capacity(target);
    for pair in order.windows(2) {
        edges.add(&nodes, pair[0], pair[1], rng);
    }
    while edges.len() < target {
        let u = rng.gen_range(0..vertex_count);
        let v = rng.gen_range(0..vertex_count);
        if u != v {
            edges.add(&nodes, u, v, rng);
        }
    }
    let edges = edges.edges;

    debug!(id, vertex_count, edges = edges.len(), "graph generated");
    InputGraph { id, nodes, edges }
}

/// Edges keyed by unordered vertex pair; repeated pairs are ignored.
struct EdgeSet {
    used: HashSet<(usize, usize)>,
    edges: Vec<InputEdge>,
}

impl EdgeSet {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            used: HashSet::with_capacity(capacity),
            edges: Vec::with_capacity(capacity),
        }
    }

    fn len(&self) -> usize {
        self.edges.len()
    }

    fn add(&mut self, nodes: &[String], u: usize, v: usize, rng: &mut StdRng) {
        if self.used.insert((u.min(v), u.max(v))) {
            let weight = f64::from(rng.gen_range(1..=MAX_WEIGHT));
            let edge = InputEdge::new(nodes[u].clone(), nodes[v].clone(), weight);
            self.edges.push(edge);
        }
    }
}

/// Concatenates `files`, renumbering graph ids from 1.
#[must_use]
pub fn combine(files: &[GraphFile]) -> GraphFile {
    let graphs = files
        .iter()
        .flat_map(|file| file.graphs.iter().cloned())
        .zip(1..)
        .map(|(graph, id)| InputGraph { id, ..graph })
        .collect();
    GraphFile { graphs }
}

/// Generates each of `classes` into `dir`, plus a combined file holding all
/// of them, and returns the written paths.
///
/// # Errors
/// Returns [`JsonProviderError::Io`] or [`JsonProviderError::Encode`] when
/// a file cannot be written.
pub fn write_generated(
    dir: &Path,
    config: &GeneratorConfig,
    classes: &[SizeClass],
) -> Result<Vec<PathBuf>, JsonProviderError> {
    fs::create_dir_all(dir).map_err(|source| JsonProviderError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut written = Vec::with_capacity(classes.len() + 1);
    let mut files = Vec::with_capacity(classes.len());
    for &class in classes {
        let file = generate_class(class, config);
        let path = dir.join(class.file_name());
        write_graph_file(&path, &file)?;
        debug!(
            class = class.name(),
            graphs = file.graphs.len(),
            path = %path.display(),
            "class written"
        );
        written.push(path);
        files.push(file);
    }

    let path = dir.join(COMBINED_FILE);
    write_graph_file(&path, &combine(&files))?;
    written.push(path);
    Ok(written)
}
