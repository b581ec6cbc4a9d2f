//! Error types for batch processing.

use std::path::PathBuf;

/// Errors from reading, processing, or writing a batch file.
#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("input file not found: {}", path.display())]
    InputNotFound { path: PathBuf },

    #[error("error reading file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The whole-document input failed to parse.
    #[error("invalid JSON format: {0}")]
    InvalidJsonDocument(#[source] serde_json::Error),

    #[error("JSON must contain an object or array of objects")]
    UnsupportedShape,

    /// A line-delimited record failed to parse. Logged and skipped, never
    /// returned from a batch run.
    #[error("invalid JSON on line {line}: {source}")]
    InvalidJsonLine {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    /// A parsed value could not be read as a metadata record.
    #[error("error processing {record}: {source}")]
    Processing {
        record: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("error writing {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
