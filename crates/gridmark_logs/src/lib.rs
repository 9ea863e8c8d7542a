//! Gridmark logs - tally distinct error messages in a log file
//!
//! Reads a log line by line, classifies each line, and counts the distinct
//! messages that contain `Error`.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod classify;
mod error;
mod reader;
mod tally;

pub use classify::{classify_line, LineClass, ERROR_MARKER};
pub use error::LogError;
pub use reader::LogReader;
pub use tally::{scan, scan_file, ErrorTally};
