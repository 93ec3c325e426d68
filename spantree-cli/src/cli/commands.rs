//! Command implementations and argument parsing for the `spantree` binary.

use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use clap::{Args, Parser, Subcommand};
use spantree_providers_json::{
    GeneratorConfig, InputGraph, JsonProviderError, ReportFile, SizeClass, SummaryRow,
    evaluate_graph, read_graph_file, write_generated, write_report, write_summary_file,
};
use thiserror::Error;
use tracing::{Span, field, info, instrument, warn};

const DEFAULT_DATA_DIR: &str = "data";
const DEFAULT_REPORT: &str = "report.json";
const DEFAULT_SUMMARY: &str = "summary.csv";
/// Largest cost difference still treated as agreement between algorithms.
const COST_TOLERANCE: f64 = 1e-6;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "spantree",
    about = "Compare Kruskal and Prim minimum spanning trees on labelled graphs."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Write seeded synthetic graph sets as JSON.
    Generate(GenerateCommand),
    /// Run both algorithms on every graph in the input files.
    Run(RunCommand),
}

/// Options accepted by the `generate` command.
#[derive(Debug, Args, Clone)]
pub struct GenerateCommand {
    /// Directory receiving `<class>_graphs.json` and `combined_graphs.json`.
    #[arg(long = "output-dir", default_value = DEFAULT_DATA_DIR)]
    pub output_dir: PathBuf,

    /// Base seed; identical seeds reproduce identical graphs.
    #[arg(long, default_value_t = GeneratorConfig::default().seed)]
    pub seed: u64,

    /// Size class to generate (`small`, `medium`, `large`, `extra`); repeat
    /// for several. Defaults to all four.
    #[arg(long = "class", value_name = "NAME")]
    pub classes: Vec<SizeClass>,
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Graph files to load; missing files are skipped with a warning.
    #[arg(long = "input", value_name = "FILE", required = true, num_args = 1..)]
    pub inputs: Vec<PathBuf>,

    /// Destination of the JSON report.
    #[arg(long, default_value = DEFAULT_REPORT)]
    pub report: PathBuf,

    /// Destination of the CSV summary.
    #[arg(long, default_value = DEFAULT_SUMMARY)]
    pub summary: PathBuf,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// A file or directory could not be prepared.
    #[error("failed to prepare `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// None of the input files held a graph.
    #[error("no graphs found in {inputs} input file(s); run `spantree generate` first")]
    NoGraphs {
        /// Number of input paths supplied.
        inputs: usize,
    },
    /// Loading, converting or writing graph data failed.
    #[error(transparent)]
    Provider(#[from] JsonProviderError),
}

/// Outcome of a `run` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Graphs processed across all loaded files.
    pub graphs: usize,
    /// Graphs for which at least one algorithm found no spanning tree.
    pub disconnected: usize,
    /// Graphs on which the algorithms disagreed about the minimum cost.
    pub mismatched: usize,
    /// Input paths that did not exist.
    pub skipped: Vec<PathBuf>,
    /// Where the JSON report was written.
    pub report: PathBuf,
    /// Where the CSV summary was written.
    pub summary: PathBuf,
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionSummary {
    /// Files written by `generate`.
    Generated {
        /// Written paths, the combined file last.
        files: Vec<PathBuf>,
    },
    /// Result of `run`.
    Ran(RunSummary),
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when loading, evaluating or writing fails, or when
/// no graphs were found.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use spantree_cli::cli::{Cli, Command, ExecutionSummary, RunCommand, run_cli};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let dir = tempfile::tempdir()?;
/// let input = dir.path().join("graphs.json");
/// std::fs::write(
///     &input,
///     r#"{"graphs":[{"id":1,"nodes":["A","B"],"edges":[{"from":"A","to":"B","weight":3}]}]}"#,
/// )?;
/// let cli = Cli {
///     command: Command::Run(RunCommand {
///         inputs: vec![input],
///         report: dir.path().join("report.json"),
///         summary: dir.path().join("summary.csv"),
///     }),
/// };
/// let ExecutionSummary::Ran(summary) = run_cli(cli)? else {
///     unreachable!("run produces a run summary");
/// };
/// assert_eq!(summary.graphs, 1);
/// # Ok(())
/// # }
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    let span = Span::current();
    match cli.command {
        Command::Generate(generate) => {
            span.record("command", field::display("generate"));
            generate_command(&generate).map(|files| ExecutionSummary::Generated { files })
        }
        Command::Run(run) => {
            span.record("command", field::display("run"));
            run_command(&run).map(ExecutionSummary::Ran)
        }
    }
}

#[instrument(
    name = "cli.generate",
    err,
    skip(command),
    fields(output_dir = %command.output_dir.display(), seed = command.seed),
)]
pub(super) fn generate_command(command: &GenerateCommand) -> Result<Vec<PathBuf>, CliError> {
    let classes: &[SizeClass] = if command.classes.is_empty() {
        &SizeClass::ALL
    } else {
        &command.classes
    };
    let config = GeneratorConfig { seed: command.seed };
    let files = write_generated(&command.output_dir, &config, classes)?;
    info!(
        files = files.len(),
        classes = classes.len(),
        "graph sets generated"
    );
    Ok(files)
}

#[instrument(
    name = "cli.execute",
    err,
    skip(command),
    fields(inputs = command.inputs.len(), graphs = field::Empty),
)]
pub(super) fn run_command(command: &RunCommand) -> Result<RunSummary, CliError> {
    let (graphs, skipped) = load_inputs(&command.inputs)?;
    if graphs.is_empty() {
        return Err(CliError::NoGraphs {
            inputs: command.inputs.len(),
        });
    }
    Span::current().record("graphs", graphs.len());

    let mut report = ReportFile::default();
    let mut rows: Vec<SummaryRow> = Vec::with_capacity(graphs.len());
    let mut disconnected = 0;
    let mut mismatched = 0;
    for (graph_id, input) in (1..).zip(&graphs) {
        let evaluation = evaluate_graph(graph_id, input)?;
        if let Some(error) = evaluation.prim.error().or(evaluation.kruskal.error()) {
            disconnected += 1;
            warn!(
                graph_id,
                source_id = input.id,
                code = error.code().as_str(),
                error = %error,
                "graph has no spanning tree"
            );
        }
        if !evaluation.costs_agree(COST_TOLERANCE) {
            mismatched += 1;
            warn!(
                graph_id,
                prim = evaluation.prim.total_cost(),
                kruskal = evaluation.kruskal.total_cost(),
                "algorithms disagree on minimum cost"
            );
        }
        report.results.push(evaluation.result);
        rows.push(evaluation.summary);
    }

    write_report(&command.report, &report)?;
    ensure_parent_dir(&command.summary)?;
    write_summary_file(&command.summary, &rows)?;

    info!(
        graphs = graphs.len(),
        disconnected,
        mismatched,
        report = %command.report.display(),
        summary = %command.summary.display(),
        "run completed"
    );
    Ok(RunSummary {
        graphs: graphs.len(),
        disconnected,
        mismatched,
        skipped,
        report: command.report.clone(),
        summary: command.summary.clone(),
    })
}

/// Loads every existing input file in order; absent paths are returned
/// separately.
pub(super) fn load_inputs(paths: &[PathBuf]) -> Result<(Vec<InputGraph>, Vec<PathBuf>), CliError> {
    let mut graphs = Vec::new();
    let mut skipped = Vec::new();
    for path in paths {
        if !path.is_file() {
            warn!(path = %path.display(), "input file not found; skipping");
            skipped.push(path.clone());
            continue;
        }
        let file = read_graph_file(path)?;
        info!(path = %path.display(), graphs = file.graphs.len(), "input loaded");
        graphs.extend(file.graphs);
    }
    Ok((graphs, skipped))
}

fn ensure_parent_dir(path: &Path) -> Result<(), CliError> {
    let Some(parent) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) else {
        return Ok(());
    };
    fs::create_dir_all(parent).map_err(|source| CliError::Io {
        path: parent.to_path_buf(),
        source,
    })
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::io::Cursor;
/// # use std::path::PathBuf;
/// # use spantree_cli::cli::{ExecutionSummary, RunSummary, render_summary};
/// let summary = ExecutionSummary::Ran(RunSummary {
///     graphs: 30,
///     disconnected: 0,
///     mismatched: 0,
///     skipped: Vec::new(),
///     report: PathBuf::from("report.json"),
///     summary: PathBuf::from("summary.csv"),
/// });
/// let mut buffer = Cursor::new(Vec::new());
/// render_summary(&summary, &mut buffer)?;
/// let text = String::from_utf8(buffer.into_inner()).expect("utf-8");
/// assert!(text.starts_with("processed graphs: 30\n"));
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    match summary {
        ExecutionSummary::Generated { files } => {
            for file in files {
                writeln!(writer, "generated: {}", file.display())?;
            }
        }
        ExecutionSummary::Ran(run) => {
            writeln!(writer, "processed graphs: {}", run.graphs)?;
            if run.disconnected > 0 {
                writeln!(writer, "disconnected graphs: {}", run.disconnected)?;
            }
            if run.mismatched > 0 {
                writeln!(writer, "cost mismatches: {}", run.mismatched)?;
            }
            for path in &run.skipped {
                writeln!(writer, "skipped: {}", path.display())?;
            }
            writeln!(writer, "report: {}", run.report.display())?;
            writeln!(writer, "summary: {}", run.summary.display())?;
        }
    }
    Ok(())
}
