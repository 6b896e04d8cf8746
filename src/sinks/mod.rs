//! Sink implementations and destination opening

pub mod console;
pub mod file;
pub mod memory;

pub use console::{StderrSink, StdoutSink};
pub use file::FileSink;
pub use memory::MemorySink;

pub use crate::core::Sink;

use crate::core::Result;
use std::fs;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

/// Open one sink per distinct destination.
///
/// `stderr` and `stdout` name the standard streams; anything else is a file
/// path, optionally prefixed with `file://`. Paths are compared after
/// normalization, so `./app.log`, `app.log` and its absolute form are opened
/// once and the file never gets two writers.
pub fn open(destinations: &[String]) -> Result<Vec<Arc<dyn Sink>>> {
    let mut opened: Vec<(PathBuf, Arc<dyn Sink>)> = Vec::with_capacity(destinations.len());

    for destination in destinations {
        let target = destination.strip_prefix("file://").unwrap_or(destination);
        let key = match target {
            "stderr" | "stdout" => PathBuf::from(target),
            path => file_key(path),
        };
        if opened.iter().any(|(existing, _)| *existing == key) {
            continue;
        }

        let sink: Arc<dyn Sink> = match target {
            "stderr" => Arc::new(StderrSink::new()),
            "stdout" => Arc::new(StdoutSink::new()),
            path => Arc::new(FileSink::new(lexical_path(path))?),
        };
        opened.push((key, sink));
    }

    Ok(opened.into_iter().map(|(_, sink)| sink).collect())
}

/// `path` with `.` components removed
fn lexical_path(path: &str) -> PathBuf {
    Path::new(path)
        .components()
        .filter(|component| !matches!(component, Component::CurDir))
        .collect()
}

/// Identity of a file destination: the canonical parent directory joined
/// with the file name, or the lexical path when the parent cannot be resolved
fn file_key(path: &str) -> PathBuf {
    let lexical = lexical_path(path);
    let resolved = match (lexical.parent(), lexical.file_name()) {
        (Some(parent), Some(name)) => {
            let parent = if parent.as_os_str().is_empty() {
                Path::new(".")
            } else {
                parent
            };
            fs::canonicalize(parent).ok().map(|dir| dir.join(name))
        }
        _ => None,
    };
    resolved.unwrap_or(lexical)
}
