//! Line-by-line log reader.

use super::error::LogError;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// Reads a log one line at a time.
///
/// Line terminators (`\n` or `\r\n`) are stripped.
#[derive(Debug)]
pub struct LogReader<R> {
    source: R,
    path: PathBuf,
    lines_read: usize,
}

impl LogReader<BufReader<File>> {
    /// Opens a log file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<Path>) -> Result<Self, LogError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| LogError::new(path, e))?;
        debug!("Opened log file");
        Ok(Self {
            source: BufReader::new(file),
            path: path.to_path_buf(),
            lines_read: 0,
        })
    }
}

impl<R: BufRead> LogReader<R> {
    /// Wraps any buffered reader.
    pub fn from_reader(source: R) -> Self {
        Self {
            source,
            path: PathBuf::from("<reader>"),
            lines_read: 0,
        }
    }

    /// True if another line is available. Does not consume input.
    pub fn has_next_line(&mut self) -> Result<bool, LogError> {
        let buf = self
            .source
            .fill_buf()
            .map_err(|e| LogError::new(&self.path, e))?;
        Ok(!buf.is_empty())
    }

    /// Reads the next line, `None` at end of input.
    ///
    /// Bytes that are not valid UTF-8 are replaced with U+FFFD rather than
    /// failing the read.
    pub fn next_line(&mut self) -> Result<Option<String>, LogError> {
        let mut bytes = Vec::new();
        let read = self
            .source
            .read_until(b'\n', &mut bytes)
            .map_err(|e| LogError::new(&self.path, e))?;
        if read == 0 {
            return Ok(None);
        }
        if bytes.last() == Some(&b'\n') {
            bytes.pop();
            if bytes.last() == Some(&b'\r') {
                bytes.pop();
            }
        }
        self.lines_read += 1;
        Ok(Some(String::from_utf8_lossy(&bytes).into_owned()))
    }

    /// Lines returned so far.
    pub fn lines_read(&self) -> usize {
        self.lines_read
    }
}

impl<R: BufRead> Iterator for LogReader<R> {
    type Item = Result<String, LogError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_line().transpose()
    }
}
