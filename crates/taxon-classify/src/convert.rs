//! Record assembler: metadata in, subtopic out.

use taxon_core::{ConversionResult, PaperMetadata, Subtopic};

use crate::error::ClassifyError;
use crate::keywords::extract_keywords;
use crate::naming::generate_subtopic_name;
use crate::resolve::{bloom_for, expertise_for, granularity_for};
use crate::text::SearchText;
use crate::topics::{generate_next_topics, prerequisites_for};

/// Per-run conversion switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Attach the domain keywords found in title and abstract.
    pub extract_keywords: bool,
}

/// Classify one record. Pure: the same record always yields the same subtopic.
#[must_use]
pub fn convert_metadata(meta: &PaperMetadata) -> Subtopic {
    let text = SearchText::from_metadata(meta);
    Subtopic {
        name: generate_subtopic_name(meta),
        granularity_level: granularity_for(&text, meta),
        bloom_taxonomy: bloom_for(&text, meta),
        expertise_level: expertise_for(&text, meta),
        prerequisites: prerequisites_for(&text, meta),
        next_topics: generate_next_topics(meta),
    }
}

/// Classify one record and wrap it in the batch output envelope.
///
/// `fallback_id` is used when the record has no `id`.
#[must_use]
pub fn convert_record(
    meta: &PaperMetadata,
    fallback_id: impl FnOnce() -> String,
    options: ConvertOptions,
) -> ConversionResult {
    let keywords = options.extract_keywords.then(|| {
        extract_keywords(&format!("{} {}", meta.title, meta.abstract_text))
            .into_iter()
            .map(str::to_string)
            .collect()
    });

    ConversionResult {
        original_id: meta.id_text().unwrap_or_else(fallback_id),
        original_categories: meta.categories.clone(),
        subtopic: convert_metadata(meta),
        keywords,
    }
}

/// Parse a single JSON object and classify it.
///
/// # Errors
///
/// Returns [`ClassifyError::InvalidJson`] if `json` does not parse, or
/// [`ClassifyError::InvalidRecord`] if it is not a metadata object.
pub fn convert_json_str(json: &str) -> Result<Subtopic, ClassifyError> {
    let value: serde_json::Value = serde_json::from_str(json).map_err(ClassifyError::InvalidJson)?;
    let meta: PaperMetadata =
        serde_json::from_value(value).map_err(ClassifyError::InvalidRecord)?;
    Ok(convert_metadata(&meta))
}
