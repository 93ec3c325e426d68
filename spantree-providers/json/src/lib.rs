//! JSON graph provider for the spantree harness.
//!
//! Reads labelled graphs from JSON, maps labels onto the dense vertex ids
//! used by `spantree-core`, runs both MST algorithms on each graph and
//! renders the outcome as a JSON report plus a CSV summary. It also
//! generates seeded synthetic input sets.

mod errors;
mod evaluate;
mod generate;
mod io;
mod labels;
mod report;
mod schema;
mod summary;

pub use errors::JsonProviderError;
pub use evaluate::{Evaluation, evaluate_graph};
pub use generate::{
    COMBINED_FILE, GeneratorConfig, SizeClass, combine, generate_class, write_generated,
};
pub use io::{read_graph_file, write_graph_file, write_report};
pub use labels::{LabelIndex, alphabet_label};
pub use report::{AlgorithmOutput, InputStats, ReportFile, ResultItem};
pub use schema::{GraphFile, InputEdge, InputGraph};
pub use summary::{SUMMARY_HEADER, SummaryRow, write_summary, write_summary_file};
