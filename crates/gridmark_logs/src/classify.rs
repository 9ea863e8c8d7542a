//! Line classification.

use tracing::instrument;

/// Substring that marks a line as an error. Matching is case-sensitive.
pub const ERROR_MARKER: &str = "Error";

/// Kind of log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum LineClass {
    /// Contains [`ERROR_MARKER`].
    Error,
    /// Anything else.
    Other,
}

/// Classifies a single line.
#[instrument(level = "trace")]
pub fn classify_line(line: &str) -> LineClass {
    if line.contains(ERROR_MARKER) {
        LineClass::Error
    } else {
        LineClass::Other
    }
}
