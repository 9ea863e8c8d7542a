//! Counting distinct error messages.

use super::classify::{classify_line, LineClass};
use super::error::LogError;
use super::reader::LogReader;
use std::collections::BTreeMap;
use std::io::BufRead;
use std::path::Path;
use tracing::{debug, info, instrument};

/// Occurrence counts of error messages, keyed by trimmed line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorTally {
    counts: BTreeMap<String, usize>,
    lines_seen: usize,
}

impl ErrorTally {
    /// Creates an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts `line` if it is an error line. Returns its class.
    pub fn record(&mut self, line: &str) -> LineClass {
        self.lines_seen += 1;
        let class = classify_line(line);
        if class == LineClass::Error {
            *self.counts.entry(line.trim().to_string()).or_insert(0) += 1;
        }
        class
    }

    /// Occurrences of `message`.
    pub fn count(&self, message: &str) -> usize {
        self.counts.get(message.trim()).copied().unwrap_or(0)
    }

    /// Number of distinct error messages.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Total error lines.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Lines passed to [`record`](Self::record), error or not.
    pub fn lines_seen(&self) -> usize {
        self.lines_seen
    }

    /// Messages by descending count, ties in message order.
    pub fn ranked(&self) -> Vec<(&str, usize)> {
        let mut ranked: Vec<(&str, usize)> = self
            .counts
            .iter()
            .map(|(message, count)| (message.as_str(), *count))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked
    }
}

/// Tallies every line from `reader`.
#[instrument(skip(reader))]
pub fn scan<R: BufRead>(reader: &mut LogReader<R>) -> Result<ErrorTally, LogError> {
    let mut tally = ErrorTally::new();
    while let Some(line) = reader.next_line()? {
        if tally.record(&line) == LineClass::Error {
            debug!(line = %line, "Error line");
        }
    }
    info!(
        lines = tally.lines_seen(),
        errors = tally.total(),
        distinct = tally.distinct(),
        "Scan complete"
    );
    Ok(tally)
}

/// Opens and tallies a log file.
#[instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn scan_file(path: impl AsRef<Path>) -> Result<ErrorTally, LogError> {
    let mut reader = LogReader::open(path)?;
    scan(&mut reader)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_counts_distinct_errors() {
        let mut tally = ErrorTally::new();
        tally.record("Error: disk full");
        tally.record("info: started");
        tally.record("Error: disk full  ");
        tally.record("Error: timeout");

        assert_eq!(tally.count("Error: disk full"), 2);
        assert_eq!(tally.count("Error: timeout"), 1);
        assert_eq!(tally.count("info: started"), 0);
        assert_eq!(tally.distinct(), 2);
        assert_eq!(tally.total(), 3);
        assert_eq!(tally.lines_seen(), 4);
    }

    #[test]
    fn test_ranked_orders_by_count_then_message() {
        let mut tally = ErrorTally::new();
        for line in ["Error b", "Error a", "Error c", "Error c", "Error a"] {
            tally.record(line);
        }
        assert_eq!(
            tally.ranked(),
            vec![("Error a", 2), ("Error c", 2), ("Error b", 1)]
        );
    }

    #[test]
    fn test_scan_survives_invalid_utf8() {
        let input: &[u8] = b"Error: a\nstatus \xff ok\nError: a\nError: \xfe\n";
        let mut reader = LogReader::from_reader(Cursor::new(input));
        let tally = scan(&mut reader).unwrap();
        assert_eq!(tally.lines_seen(), 4);
        assert_eq!(tally.count("Error: a"), 2);
        assert_eq!(tally.count("Error: \u{FFFD}"), 1);
        assert_eq!(tally.distinct(), 2);
    }

    #[test]
    fn test_scan_reader() {
        let mut reader = LogReader::from_reader(Cursor::new("Error x\nok\nError x\n"));
        let tally = scan(&mut reader).unwrap();
        assert_eq!(tally.count("Error x"), 2);
        assert_eq!(tally.distinct(), 1);
    }
}
