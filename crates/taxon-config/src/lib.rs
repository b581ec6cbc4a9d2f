//! # taxon-config
//!
//! Layered configuration loading for Taxon using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`TAXON_*` prefix, `__` as separator)
//! 2. Project-level `.taxon/config.toml`
//! 3. User-level `~/.config/taxon/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `TAXON_BATCH__FLUSH_THRESHOLD` -> `batch.flush_threshold`,
//! `TAXON_CLASSIFY__EXTRACT_KEYWORDS` -> `classify.extract_keywords`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use taxon_config::TaxonConfig;
//!
//! let config = TaxonConfig::load_with_dotenv().expect("config");
//! println!("flushing every {} records", config.batch.flush_threshold);
//! ```

mod batch;
mod classify;
mod error;

pub use batch::BatchConfig;
pub use classify::ClassifyConfig;
pub use error::ConfigError;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TaxonConfig {
    #[serde(default)]
    pub batch: BatchConfig,
    #[serde(default)]
    pub classify: ClassifyConfig,
}

impl TaxonConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source fails to parse or a value is out of range.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration after reading `.env` from the current directory.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` on extraction or validation failure.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer extra providers.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(".taxon/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("TAXON_").split("__"))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.batch.validate()
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("taxon").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taxon_core::SubjectFilter;

    #[test]
    fn default_config_loads() {
        let config = TaxonConfig::default();
        assert_eq!(config.batch.flush_threshold, 100);
        assert_eq!(config.batch.preview_count, 3);
        assert_eq!(config.batch.default_filter, SubjectFilter::Physics);
        assert!(!config.classify.extract_keywords);
    }

    #[test]
    fn figment_defaults_extract() {
        let figment = Figment::from(Serialized::defaults(TaxonConfig::default()));
        let config = TaxonConfig::from_figment(&figment).expect("should extract defaults");
        assert_eq!(config.batch.flush_threshold, 100);
    }
}
