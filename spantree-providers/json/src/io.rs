//! File helpers for graph and report documents.

use std::{
    fs::{self, File},
    io::{BufReader, BufWriter, Write},
    path::Path,
};

use serde::Serialize;
use tracing::{debug, instrument};

use crate::{errors::JsonProviderError, report::ReportFile, schema::GraphFile};

fn io_error(path: &Path) -> impl Fn(std::io::Error) -> JsonProviderError + '_ {
    move |source| JsonProviderError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Reads a graph file.
///
/// # Errors
/// Returns [`JsonProviderError::Io`] when the file cannot be opened and
/// [`JsonProviderError::Parse`] when it is not a valid graph document.
#[instrument(name = "json.read", level = "debug", skip_all, fields(path = %path.display()))]
pub fn read_graph_file(path: &Path) -> Result<GraphFile, JsonProviderError> {
    let file = File::open(path).map_err(io_error(path))?;
    let graphs: GraphFile = serde_json::from_reader(BufReader::new(file)).map_err(|source| {
        JsonProviderError::Parse {
            path: path.to_path_buf(),
            source,
        }
    })?;
    debug!(graphs = graphs.graphs.len(), "graph file loaded");
    Ok(graphs)
}

/// Writes `graphs` as pretty-printed JSON.
///
/// # Errors
/// Returns [`JsonProviderError::Io`] or [`JsonProviderError::Encode`] when
/// writing fails.
pub fn write_graph_file(path: &Path, graphs: &GraphFile) -> Result<(), JsonProviderError> {
    write_json(path, graphs)
}

/// Writes `report` as pretty-printed JSON, creating parent directories.
///
/// # Errors
/// Returns [`JsonProviderError::Io`] or [`JsonProviderError::Encode`] when
/// writing fails.
pub fn write_report(path: &Path, report: &ReportFile) -> Result<(), JsonProviderError> {
    write_json(path, report)
}

fn write_json(path: &Path, value: &impl Serialize) -> Result<(), JsonProviderError> {
    let parent = path.parent().filter(|dir| !dir.as_os_str().is_empty());
    if let Some(parent) = parent {
        fs::create_dir_all(parent).map_err(io_error(parent))?;
    }
    let file = File::create(path).map_err(io_error(path))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.flush().map_err(io_error(path))
}
