//! Input reading for telemetry traces.
//!
//! A trace arrives as exactly one line of JSON. [`LineSource`] reads that line
//! from any buffered reader (standard input in the binary) and hands it to
//! [`RawInput::from_json`].

mod input;

pub use input::RawInput;

use std::io::{self, BufRead, StdinLock};

use tracing::debug;

use crate::error::TraceError;

/// Reads a single JSON line from a buffered reader.
///
/// # Example
///
/// ```
/// use std::io::Cursor;
/// use packet_doctor::LineSource;
///
/// let mut source = LineSource::new(Cursor::new("[[5, 5], [2]]\nignored\n"), "memory");
/// let input = source.read().unwrap();
/// assert_eq!(input.failures, vec![2]);
/// ```
#[derive(Debug)]
pub struct LineSource<R> {
    reader: R,
    description: String,
}

impl LineSource<StdinLock<'static>> {
    /// Create a source reading from the process's standard input.
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock(), "stdin")
    }
}

impl<R: BufRead> LineSource<R> {
    /// Create a source over the given reader.
    pub fn new(reader: R, description: impl Into<String>) -> Self {
        Self {
            reader,
            description: description.into(),
        }
    }

    /// Returns a human-readable description of the source.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Read and parse the first line. Any further lines are left unread.
    pub fn read(&mut self) -> Result<RawInput, TraceError> {
        let mut line = String::new();
        let read = self.reader.read_line(&mut line).map_err(|err| match err.kind() {
            io::ErrorKind::InvalidData => TraceError::NotUtf8,
            _ => TraceError::Io(err),
        })?;
        if read == 0 {
            return Err(TraceError::MissingInput);
        }
        debug!(bytes = read, source = %self.description, "read input line");
        RawInput::from_json(line.trim_end())
    }
}
