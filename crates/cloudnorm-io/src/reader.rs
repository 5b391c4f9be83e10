//! Whitespace-triple reader
//!
//! Tokens are grouped in threes regardless of line layout. Reading stops at
//! the first token that is not a finite number; an incomplete trailing group
//! is dropped. Neither case is an error.

use crate::points::PointSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading points
#[derive(Debug, Error)]
pub enum IoError {
    #[error("Cannot read point source {source_name}: {reason}")]
    SourceUnavailable { source_name: String, reason: String },
}

/// Result type for I/O operations
pub type IoResult<T> = Result<T, IoError>;

/// Name used in errors for sources that have no path
const STREAM_SOURCE: &str = "<stream>";

/// Incremental triple parser shared by the string and stream entry points
#[derive(Debug, Default)]
struct TripleParser {
    set: PointSet,
    pending: [f64; 3],
    filled: usize,
    stopped: bool,
}

impl TripleParser {
    /// Feed a chunk of text. Returns `false` once parsing has stopped.
    fn feed(&mut self, text: &str) -> bool {
        if self.stopped {
            return false;
        }

        for token in text.split_whitespace() {
            match token.parse::<f64>() {
                Ok(value) if value.is_finite() => {
                    self.pending[self.filled] = value;
                    self.filled += 1;
                    if self.filled == 3 {
                        let [x, y, z] = self.pending;
                        self.set.push(x, y, z);
                        self.filled = 0;
                    }
                }
                _ => {
                    tracing::debug!(
                        token,
                        points = self.set.len(),
                        "Stopping at non-numeric token"
                    );
                    self.stopped = true;
                    return false;
                }
            }
        }

        true
    }

    fn finish(self) -> PointSet {
        if self.filled > 0 {
            tracing::debug!(
                leftover = self.filled,
                "Dropping incomplete trailing triple"
            );
        }
        self.set
    }
}

/// Parse points from an in-memory string
pub fn parse_points(text: &str) -> PointSet {
    let mut parser = TripleParser::default();
    parser.feed(text);
    parser.finish()
}

/// Read points from any buffered reader.
///
/// Bytes that are not valid UTF-8 are treated as non-numeric text and end
/// the read like any other malformed token.
pub fn read_points<R: BufRead>(reader: R) -> IoResult<PointSet> {
    read_named(reader, STREAM_SOURCE)
}

/// Open a file and read its points
pub fn load_points(path: impl AsRef<Path>) -> IoResult<PointSet> {
    let path = path.as_ref();
    let source_name = path.display().to_string();

    let file = File::open(path).map_err(|e| IoError::SourceUnavailable {
        source_name: source_name.clone(),
        reason: e.to_string(),
    })?;

    tracing::info!(path = %source_name, "Reading points");
    read_named(BufReader::new(file), &source_name)
}

fn read_named<R: BufRead>(mut reader: R, source_name: &str) -> IoResult<PointSet> {
    let mut parser = TripleParser::default();
    let mut line = Vec::new();

    loop {
        line.clear();
        let read = reader
            .read_until(b'\n', &mut line)
            .map_err(|e| IoError::SourceUnavailable {
                source_name: source_name.to_string(),
                reason: e.to_string(),
            })?;
        if read == 0 {
            break;
        }
        if !parser.feed(&String::from_utf8_lossy(&line)) {
            break;
        }
    }

    Ok(parser.finish())
}
