//! CSV summary writer.

use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use spantree_core::MstReport;

use crate::{errors::JsonProviderError, report::InputStats};

/// Column header of the summary file.
pub const SUMMARY_HEADER: &str =
    "graph_id,V,E,prim_cost,kruskal_cost,prim_ms,kruskal_ms,prim_ops,kruskal_ops";

/// One summary line. A `None` cost marks a failed run.
#[derive(Clone, Debug, PartialEq)]
pub struct SummaryRow {
    pub graph_id: u64,
    pub vertices: usize,
    pub edges: usize,
    pub prim_cost: Option<f64>,
    pub kruskal_cost: Option<f64>,
    pub prim_ms: f64,
    pub kruskal_ms: f64,
    pub prim_ops: u64,
    pub kruskal_ops: u64,
}

impl SummaryRow {
    #[must_use]
    pub fn new(graph_id: u64, stats: InputStats, prim: &MstReport, kruskal: &MstReport) -> Self {
        let cost = |report: &MstReport| report.success().then(|| report.total_cost());
        Self {
            graph_id,
            vertices: stats.vertices,
            edges: stats.edges,
            prim_cost: cost(prim),
            kruskal_cost: cost(kruskal),
            prim_ms: prim.elapsed_ms(),
            kruskal_ms: kruskal.elapsed_ms(),
            prim_ops: prim.operation_count(),
            kruskal_ops: kruskal.operation_count(),
        }
    }

    fn write_to(&self, writer: &mut impl Write) -> io::Result<()> {
        writeln!(
            writer,
            "{},{},{},{},{},{:.3},{:.3},{},{}",
            self.graph_id,
            self.vertices,
            self.edges,
            format_cost(self.prim_cost),
            format_cost(self.kruskal_cost),
            self.prim_ms,
            self.kruskal_ms,
            self.prim_ops,
            self.kruskal_ops,
        )
    }
}

fn format_cost(cost: Option<f64>) -> String {
    cost.map_or_else(|| "-".to_owned(), |value| value.to_string())
}

/// Writes the header followed by one line per row.
///
/// # Errors
/// Propagates any error from `writer`.
pub fn write_summary<'a>(
    writer: &mut impl Write,
    rows: impl IntoIterator<Item = &'a SummaryRow>,
) -> io::Result<()> {
    writeln!(writer, "{SUMMARY_HEADER}")?;
    for row in rows {
        row.write_to(writer)?;
    }
    writer.flush()
}

/// Writes the summary to `path`, replacing any existing file.
///
/// # Errors
/// Returns [`JsonProviderError::Io`] when the file cannot be written.
pub fn write_summary_file(path: &Path, rows: &[SummaryRow]) -> Result<(), JsonProviderError> {
    let io_error = |source| JsonProviderError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(io_error)?;
    let mut writer = BufWriter::new(file);
    write_summary(&mut writer, rows).map_err(io_error)
}
