//! Output records: the classified subtopic and its JSONL envelope.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{BloomLevel, ExpertiseLevel, GranularityLevel};

/// Educational-taxonomy classification of one paper.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Subtopic {
    /// Topic name derived from the title, at most 80 characters.
    pub name: String,
    pub granularity_level: GranularityLevel,
    pub bloom_taxonomy: BloomLevel,
    pub expertise_level: ExpertiseLevel,
    /// Never empty.
    pub prerequisites: Vec<String>,
    /// Between one and six entries.
    pub next_topics: Vec<String>,
}

/// One line of batch output.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ConversionResult {
    pub original_id: String,
    pub original_categories: String,
    pub subtopic: Subtopic,
    /// Domain keywords found in title and abstract, present only when
    /// keyword extraction was requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
}
