//! Configuration error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A config file or `TAXON_*` variable could not be read into `TaxonConfig`.
    #[error("failed to load taxon settings: {0}")]
    Figment(#[from] figment::Error),

    /// A setting parsed but is out of range.
    #[error("{field} {reason}")]
    InvalidValue { field: String, reason: String },
}
