//! Batch processing configuration.

use serde::{Deserialize, Serialize};
use taxon_core::SubjectFilter;

use crate::error::ConfigError;

const fn default_flush_threshold() -> usize {
    100
}

const fn default_preview_count() -> usize {
    3
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BatchConfig {
    /// Buffered results written to the output file per flush.
    #[serde(default = "default_flush_threshold")]
    pub flush_threshold: usize,

    /// Subtopics printed when no output file is given.
    #[serde(default = "default_preview_count")]
    pub preview_count: usize,

    /// Filter used when no `--all`/`--qbio`/`--agri` flag is passed.
    #[serde(default)]
    pub default_filter: SubjectFilter,
}

impl BatchConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.flush_threshold == 0 {
            return Err(ConfigError::InvalidValue {
                field: "batch.flush_threshold".into(),
                reason: "must be greater than zero".into(),
            });
        }
        Ok(())
    }
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            flush_threshold: default_flush_threshold(),
            preview_count: default_preview_count(),
            default_filter: SubjectFilter::default(),
        }
    }
}
