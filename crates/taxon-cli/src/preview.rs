//! Human-readable rendering of classified subtopics.

use std::fmt::Write as _;

use taxon_classify::category_description;
use taxon_core::{ConversionResult, SubjectFilter, Subtopic};

pub const RULE_WIDTH: usize = 50;

/// Multi-line rendering of one subtopic, lists joined by `, `.
#[must_use]
pub fn format_subtopic(subtopic: &Subtopic) -> String {
    format!(
        "Name: {}\n\
         Granularity Level: {}\n\
         Bloom Taxonomy: {}\n\
         Expertise Level: {}\n\
         Prerequisites: {}\n\
         Next Topics: {}",
        subtopic.name,
        subtopic.granularity_level,
        subtopic.bloom_taxonomy,
        subtopic.expertise_level,
        subtopic.prerequisites.join(", "),
        subtopic.next_topics.join(", "),
    )
}

/// Category codes with a readable name appended where one is known,
/// e.g. `afs.SOI (Soil Sciences) hep-ph`.
#[must_use]
pub fn describe_categories(categories: &str) -> String {
    categories
        .split_whitespace()
        .map(|code| match category_description(code) {
            description if description == code => code.to_string(),
            description => format!("{code} ({description})"),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Numbered preview of the first `count` results.
#[must_use]
pub fn render_preview(results: &[ConversionResult], count: usize) -> String {
    let mut out = format!("First {count} converted subtopics:\n{}\n", "-".repeat(RULE_WIDTH));
    for (idx, result) in results.iter().take(count).enumerate() {
        let _ = writeln!(out, "\n{}. ID: {}", idx + 1, result.original_id);
        let _ = writeln!(
            out,
            "   Categories: {}",
            describe_categories(&result.original_categories)
        );
        for line in format_subtopic(&result.subtopic).lines() {
            let _ = writeln!(out, "   {line}");
        }
        if let Some(keywords) = &result.keywords {
            let _ = writeln!(out, "   Keywords: {}", keywords.join(", "));
        }
    }
    out
}

/// Label used in the run summary for papers that passed the filter.
#[must_use]
pub const fn filter_label(filter: SubjectFilter) -> &'static str {
    match filter {
        SubjectFilter::All => "Matching",
        SubjectFilter::Physics => "Physics",
        SubjectFilter::Qbio => "Quantitative biology",
        SubjectFilter::Agriculture => "Agriculture",
    }
}
