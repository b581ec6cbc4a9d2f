//! Serde roundtrip and JsonSchema validation tests for output records.

use schemars::schema_for;
use taxon_core::*;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

fn sample_subtopic() -> Subtopic {
    Subtopic {
        name: "Soil Carbon Dynamics Under No-Till Management".into(),
        granularity_level: GranularityLevel::Fine,
        bloom_taxonomy: BloomLevel::Analysis,
        expertise_level: ExpertiseLevel::Advanced,
        prerequisites: vec!["Chemistry".into(), "Soil science".into()],
        next_topics: vec!["Soil chemistry".into(), "Pedology".into()],
    }
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

roundtrip_and_validate!(subtopic_roundtrip, Subtopic, sample_subtopic());

roundtrip_and_validate!(
    conversion_result_roundtrip,
    ConversionResult,
    ConversionResult {
        original_id: "afs/0001".into(),
        original_categories: "afs.SOI".into(),
        subtopic: sample_subtopic(),
        keywords: None,
    }
);

roundtrip_and_validate!(
    conversion_result_with_keywords_roundtrip,
    ConversionResult,
    ConversionResult {
        original_id: "line_3".into(),
        original_categories: "afs.SOI afs.ENV".into(),
        subtopic: sample_subtopic(),
        keywords: Some(vec!["soil".into(), "carbon".into()]),
    }
);

#[test]
fn output_line_has_expected_field_order() {
    let result = ConversionResult {
        original_id: "x".into(),
        original_categories: "hep-ph".into(),
        subtopic: sample_subtopic(),
        keywords: None,
    };
    let line = serde_json::to_string(&result).unwrap();
    let id_at = line.find("\"original_id\"").unwrap();
    let cats_at = line.find("\"original_categories\"").unwrap();
    let sub_at = line.find("\"subtopic\"").unwrap();
    assert!(id_at < cats_at && cats_at < sub_at);
    assert!(!line.contains("keywords"));
}

#[test]
fn schema_rejects_unknown_granularity() {
    let schema = serde_json::to_value(schema_for!(Subtopic)).unwrap();
    let mut instance = serde_json::to_value(sample_subtopic()).unwrap();
    instance["granularity_level"] = serde_json::json!("huge");
    let errors = validate_against_schema(&schema, &instance);
    assert!(!errors.is_empty());
}
