//! Command-line interface for generating graph sets and comparing Kruskal
//! and Prim on them.

mod commands;

pub use commands::{
    Cli, CliError, Command, ExecutionSummary, GenerateCommand, RunCommand, RunSummary,
    render_summary, run_cli,
};

#[cfg(test)]
mod test_helpers;
