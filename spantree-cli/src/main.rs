//! Entry point for the `spantree` binary.
//!
//! Initialises logging, runs the parsed command, prints its summary to
//! stdout and maps failures to a non-zero exit code.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use spantree_cli::{
    cli::{Cli, CliError, render_summary, run_cli},
    logging::{self, LoggingError},
};
use spantree_providers_json::JsonProviderError;
use tracing::{error, field};

fn try_main() -> Result<()> {
    let summary = run_cli(Cli::parse()).context("spantree command failed")?;
    let mut out = BufWriter::new(io::stdout().lock());
    render_summary(&summary, &mut out).context("could not print the summary")?;
    out.flush().context("could not flush stdout")
}

/// Stable code of an invalid input edge behind `err`, if that is the cause.
fn edge_code(err: &anyhow::Error) -> Option<&'static str> {
    match err.downcast_ref::<CliError>()? {
        CliError::Provider(JsonProviderError::InvalidEdge { source, .. }) => {
            Some(source.code().as_str())
        }
        _ => None,
    }
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        logging_unavailable(&err);
        return ExitCode::FAILURE;
    }
    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(
                error = %format!("{err:#}"),
                code = edge_code(&err).map(field::display),
                "command execution failed"
            );
            ExitCode::FAILURE
        }
    }
}

#[expect(clippy::print_stderr, reason = "no subscriber exists to carry this error")]
fn logging_unavailable(err: &LoggingError) {
    eprintln!("spantree: logging setup failed: {err}");
}
