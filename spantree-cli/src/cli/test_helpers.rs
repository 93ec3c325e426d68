//! Small helpers shared across CLI tests.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use tempfile::TempDir;

use super::commands::run_command;
use super::{Cli, CliError, RunCommand, run_cli};

pub(super) const FIVE_VERTEX_GRAPH: &str = r#"{"graphs":[{"id":1,
    "nodes":["A","B","C","D","E"],"edges":[
    {"from":"A","to":"B","weight":4},{"from":"A","to":"C","weight":3},
    {"from":"B","to":"C","weight":2},{"from":"B","to":"D","weight":5},
    {"from":"C","to":"D","weight":7},{"from":"C","to":"E","weight":8},
    {"from":"D","to":"E","weight":6}]}]}"#;

pub(super) const TWO_PAIR_GRAPH: &str = r#"{"graphs":[{"id":2,"nodes":["A","B","C","D"],"edges":[
    {"from":"A","to":"B","weight":1},{"from":"C","to":"D","weight":1}]}]}"#;

pub(super) fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

pub(super) fn create_text_file(dir: &TempDir, name: &str, contents: &str) -> io::Result<PathBuf> {
    let path = dir.path().join(name);
    let mut file = File::create(&path)?;
    file.write_all(contents.as_bytes())?;
    Ok(path)
}

/// A run over `inputs` writing its outputs under `dir/out`.
pub(super) fn run_into(dir: &TempDir, inputs: Vec<PathBuf>) -> RunCommand {
    let out = dir.path().join("out");
    RunCommand {
        inputs,
        report: out.join("report.json"),
        summary: out.join("summary.csv"),
    }
}

pub(super) fn run_cli_expecting_error(cli: Cli, panic_msg: &str) -> CliError {
    match run_cli(cli) {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}

pub(super) fn run_command_expecting_error(cmd: &RunCommand, panic_msg: &str) -> CliError {
    match run_command(cmd) {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}
