//! Input paper metadata record.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// One paper's metadata as supplied by an arXiv-style export.
///
/// Only `title`, `abstract`, and `categories` drive classification. Missing or
/// `null` text fields read as empty strings. Every other field is kept in
/// `extra` untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaperMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,

    #[serde(rename = "abstract", default, deserialize_with = "null_as_empty")]
    pub abstract_text: String,

    /// Whitespace-separated category codes, e.g. `"hep-ph astro-ph.CO"`.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub categories: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PaperMetadata {
    /// Build a record from the three classification fields.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        abstract_text: impl Into<String>,
        categories: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            abstract_text: abstract_text.into(),
            categories: categories.into(),
            ..Self::default()
        }
    }

    /// Attach an id.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(Value::String(id.into()));
        self
    }

    /// Category codes in record order.
    pub fn category_codes(&self) -> impl Iterator<Item = &str> {
        self.categories.split_whitespace()
    }

    /// The first category code, if any.
    #[must_use]
    pub fn primary_category(&self) -> Option<&str> {
        self.category_codes().next()
    }

    /// The record id as text. String ids are returned verbatim, other scalars
    /// as their JSON rendering.
    #[must_use]
    pub fn id_text(&self) -> Option<String> {
        match self.id.as_ref()? {
            Value::String(id) => Some(id.clone()),
            other => Some(other.to_string()),
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
