//! Log reading errors.

use derive_more::{Display, Error};
use std::path::PathBuf;

/// Failure while opening or reading a log.
#[derive(Debug, Display, Error)]
#[display("Log error reading {}: {}", path.display(), source)]
pub struct LogError {
    /// File being read, or `<reader>` for in-memory sources.
    pub path: PathBuf,
    /// Underlying I/O failure.
    pub source: std::io::Error,
}

impl LogError {
    /// Wraps an I/O error with the path it came from.
    pub fn new(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self {
            path: path.into(),
            source,
        }
    }
}
