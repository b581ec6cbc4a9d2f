//! Prerequisite and follow-on topic generators.
//!
//! Both generators collect into an insertion-ordered set so output order is
//! reproducible: categories in record order, each category's list in table
//! order, then content rules in rule order.

use indexmap::IndexSet;
use taxon_core::PaperMetadata;

use crate::keywords::PREREQUISITE_RULES;
use crate::tables::lookup_category;
use crate::text::SearchText;

/// Returned when no category or content rule yields a prerequisite.
pub const PREREQUISITE_SENTINEL: &str = "Agriculture basics";
/// Returned when no category yields a follow-on topic.
pub const NEXT_TOPIC_SENTINEL: &str = "Advanced agricultural topics";
/// Upper bound on follow-on topics per record.
pub const MAX_NEXT_TOPICS: usize = 6;

/// Prerequisites from every tabled category plus content rules. Never empty.
#[must_use]
pub fn generate_prerequisites(meta: &PaperMetadata) -> Vec<String> {
    prerequisites_for(&SearchText::from_metadata(meta), meta)
}

/// Follow-on topics from every tabled category, at most six. Never empty.
#[must_use]
pub fn generate_next_topics(meta: &PaperMetadata) -> Vec<String> {
    let mut topics: IndexSet<&'static str> = IndexSet::new();
    for def in meta.category_codes().filter_map(lookup_category) {
        topics.extend(def.next_topics.iter().copied());
    }

    if topics.is_empty() {
        return vec![NEXT_TOPIC_SENTINEL.to_string()];
    }

    topics
        .into_iter()
        .take(MAX_NEXT_TOPICS)
        .map(str::to_string)
        .collect()
}

pub(crate) fn prerequisites_for(text: &SearchText, meta: &PaperMetadata) -> Vec<String> {
    let mut prerequisites: IndexSet<&'static str> = IndexSet::new();
    for def in meta.category_codes().filter_map(lookup_category) {
        prerequisites.extend(def.prerequisites.iter().copied());
    }

    for (triggers, topic) in PREREQUISITE_RULES {
        if text.contains_any(triggers) {
            prerequisites.insert(*topic);
        }
    }

    if prerequisites.is_empty() {
        return vec![PREREQUISITE_SENTINEL.to_string()];
    }

    prerequisites.into_iter().map(str::to_string).collect()
}
