//! Integration tests for TOML and environment configuration loading.
//!
//! Uses `figment::Jail` for sandboxed cwd and env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;
use taxon_config::{ConfigError, TaxonConfig};
use taxon_core::SubjectFilter;

#[test]
fn loads_batch_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[batch]
flush_threshold = 25
preview_count = 5
default_filter = "agriculture"
"#,
        )?;

        let config: TaxonConfig = Figment::from(Serialized::defaults(TaxonConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.batch.flush_threshold, 25);
        assert_eq!(config.batch.preview_count, 5);
        assert_eq!(config.batch.default_filter, SubjectFilter::Agriculture);
        assert!(!config.classify.extract_keywords);
        Ok(())
    });
}

#[test]
fn partial_section_keeps_other_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r"
[classify]
extract_keywords = true
",
        )?;

        let config: TaxonConfig = Figment::from(Serialized::defaults(TaxonConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert!(config.classify.extract_keywords);
        assert_eq!(config.batch.flush_threshold, 100);
        assert_eq!(config.batch.default_filter, SubjectFilter::Physics);
        Ok(())
    });
}

#[test]
fn project_config_file_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".taxon")?;
        jail.create_file(
            ".taxon/config.toml",
            r#"
[batch]
default_filter = "qbio"
"#,
        )?;

        let config = TaxonConfig::load().expect("config loads");
        assert_eq!(config.batch.default_filter, SubjectFilter::Qbio);
        Ok(())
    });
}

#[test]
fn env_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.create_dir(".taxon")?;
        jail.create_file(
            ".taxon/config.toml",
            r"
[batch]
flush_threshold = 10
",
        )?;
        jail.set_env("TAXON_BATCH__FLUSH_THRESHOLD", "250");
        jail.set_env("TAXON_CLASSIFY__EXTRACT_KEYWORDS", "true");

        let config = TaxonConfig::load().expect("config loads");
        assert_eq!(config.batch.flush_threshold, 250);
        assert!(config.classify.extract_keywords);
        Ok(())
    });
}

#[test]
fn env_only_figment_maps_nested_keys() {
    Jail::expect_with(|jail| {
        jail.set_env("TAXON_BATCH__DEFAULT_FILTER", "all");

        let config: TaxonConfig = Figment::from(Serialized::defaults(TaxonConfig::default()))
            .merge(Env::prefixed("TAXON_").split("__"))
            .extract()?;

        assert_eq!(config.batch.default_filter, SubjectFilter::All);
        Ok(())
    });
}

#[test]
fn zero_flush_threshold_fails_validation() {
    Jail::expect_with(|jail| {
        jail.set_env("TAXON_BATCH__FLUSH_THRESHOLD", "0");

        let err = TaxonConfig::load().expect_err("zero threshold rejected");
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
        Ok(())
    });
}

#[test]
fn unknown_filter_is_a_figment_error() {
    Jail::expect_with(|jail| {
        jail.set_env("TAXON_BATCH__DEFAULT_FILTER", "chemistry");

        let err = TaxonConfig::load().expect_err("unknown filter rejected");
        assert!(matches!(err, ConfigError::Figment(_)));
        assert!(err.to_string().starts_with("failed to load taxon settings: "));
        Ok(())
    });
}
