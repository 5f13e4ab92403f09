//! Error types for reading and shaping telemetry traces.

use thiserror::Error;

/// Errors that can occur between reading stdin and building a figure.
#[derive(Debug, Error)]
pub enum TraceError {
    /// Reading the input stream failed.
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    /// The input stream ended before a line was available.
    #[error("no input line to parse")]
    MissingInput,

    /// The input line is not valid UTF-8 text.
    #[error("input is not valid UTF-8")]
    NotUtf8,

    /// The input line is not valid JSON.
    #[error("input is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// The JSON is valid but does not have the expected arity or element types.
    #[error("unexpected input shape: {0}")]
    Shape(String),

    /// The elapsed-time series has no entries, so there is nothing to plot.
    #[error("elapsed-time series is empty, nothing to plot")]
    EmptyInput,
}

impl TraceError {
    /// True for errors caused by the input line not being parseable at all.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            TraceError::MissingInput | TraceError::NotUtf8 | TraceError::Parse(_)
        )
    }
}
