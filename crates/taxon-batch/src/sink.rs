//! JSON Lines output sink.
//!
//! Every flush reopens the output file in append mode through
//! `serde_jsonlines::append_json_lines`, so results from earlier flushes and
//! earlier runs are kept.

use std::path::{Path, PathBuf};

use taxon_core::ConversionResult;

use crate::error::BatchError;

/// Appends conversion results to a JSON Lines file.
#[derive(Debug, Clone)]
pub struct JsonlSink {
    path: PathBuf,
}

impl JsonlSink {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append `results` one per line and return how many were written.
    ///
    /// An empty slice leaves the file untouched (it is not created).
    ///
    /// # Errors
    ///
    /// Returns [`BatchError::Write`] if the file cannot be opened or written.
    pub fn append(&self, results: &[ConversionResult]) -> Result<usize, BatchError> {
        if results.is_empty() {
            return Ok(0);
        }
        serde_jsonlines::append_json_lines(&self.path, results).map_err(|source| {
            BatchError::Write {
                path: self.path.clone(),
                source,
            }
        })?;
        tracing::debug!(path = %self.path.display(), count = results.len(), "appended results");
        Ok(results.len())
    }
}
