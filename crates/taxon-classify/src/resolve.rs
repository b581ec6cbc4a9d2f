//! Attribute resolvers: keyword table first, then the primary category.

use taxon_core::{BloomLevel, ExpertiseLevel, GranularityLevel, PaperMetadata};

use crate::keywords::{
    BLOOM_TRIGGERS, EXPERTISE_TRIGGERS, GRANULARITY_TRIGGERS, TECHNICAL_INDICATORS,
};
use crate::tables::{
    CategoryDefinition, FALLBACK_CATEGORY, UNKNOWN_BLOOM, UNKNOWN_EXPERTISE, UNKNOWN_GRANULARITY,
    lookup_category,
};
use crate::text::SearchText;

/// Technical-term counts at or above these thresholds map to an expertise level.
const EXPERT_TECH_COUNT: usize = 7;
const ADVANCED_TECH_COUNT: usize = 3;
const INTERMEDIATE_TECH_COUNT: usize = 1;

/// Granularity of the record.
#[must_use]
pub fn determine_granularity(meta: &PaperMetadata) -> GranularityLevel {
    granularity_for(&SearchText::from_metadata(meta), meta)
}

/// Bloom taxonomy level of the record.
#[must_use]
pub fn determine_bloom_taxonomy(meta: &PaperMetadata) -> BloomLevel {
    bloom_for(&SearchText::from_metadata(meta), meta)
}

/// Expertise level of the record.
///
/// An expertise trigger wins outright. Otherwise the number of technical
/// terms present decides, and only a count of zero falls through to the
/// category default.
#[must_use]
pub fn determine_expertise_level(meta: &PaperMetadata) -> ExpertiseLevel {
    expertise_for(&SearchText::from_metadata(meta), meta)
}

pub(crate) fn granularity_for(text: &SearchText, meta: &PaperMetadata) -> GranularityLevel {
    text.first_match(GRANULARITY_TRIGGERS).unwrap_or_else(|| {
        primary_definition(meta).map_or(UNKNOWN_GRANULARITY, |def| def.granularity)
    })
}

pub(crate) fn bloom_for(text: &SearchText, meta: &PaperMetadata) -> BloomLevel {
    text.first_match(BLOOM_TRIGGERS)
        .unwrap_or_else(|| primary_definition(meta).map_or(UNKNOWN_BLOOM, |def| def.bloom))
}

pub(crate) fn expertise_for(text: &SearchText, meta: &PaperMetadata) -> ExpertiseLevel {
    if let Some(level) = text.first_match(EXPERTISE_TRIGGERS) {
        return level;
    }

    let tech_count = text.count_present(TECHNICAL_INDICATORS);
    tracing::debug!(tech_count, "expertise keyword table did not match");

    match tech_count {
        n if n >= EXPERT_TECH_COUNT => ExpertiseLevel::Expert,
        n if n >= ADVANCED_TECH_COUNT => ExpertiseLevel::Advanced,
        n if n >= INTERMEDIATE_TECH_COUNT => ExpertiseLevel::Intermediate,
        _ => primary_definition(meta).map_or(UNKNOWN_EXPERTISE, |def| def.expertise),
    }
}

/// Definition of the first category code, or of `afs.OTHER` when the record
/// has none. `None` when the code is not tabled.
fn primary_definition(meta: &PaperMetadata) -> Option<&'static CategoryDefinition> {
    lookup_category(meta.primary_category().unwrap_or(FALLBACK_CATEGORY))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn record(title: &str, abstract_text: &str, categories: &str) -> PaperMetadata {
        PaperMetadata::new(title, abstract_text, categories)
    }

    #[rstest]
    #[case("afs.HOR", GranularityLevel::Fine)]
    #[case("afs.AGR", GranularityLevel::Medium)]
    #[case("afs", GranularityLevel::Coarse)]
    #[case("hep-ph", GranularityLevel::Medium)]
    #[case("", GranularityLevel::Coarse)]
    fn granularity_falls_back_to_primary_category(
        #[case] categories: &str,
        #[case] expected: GranularityLevel,
    ) {
        assert_eq!(determine_granularity(&record("", "", categories)), expected);
    }

    #[rstest]
    #[case("A review of cover crops", GranularityLevel::Coarse)]
    #[case("Exact yields of wheat", GranularityLevel::Fine)]
    #[case("A model of wheat yields", GranularityLevel::Medium)]
    fn granularity_keyword_beats_category(#[case] title: &str, #[case] expected: GranularityLevel) {
        assert_eq!(determine_granularity(&record(title, "", "afs.OTHER")), expected);
    }

    #[test]
    fn granularity_earlier_level_wins_ties() {
        // "overview" (coarse) and "measurement" (fine) both present
        let meta = record("Overview of measurement practice", "", "afs.HOR");
        assert_eq!(determine_granularity(&meta), GranularityLevel::Coarse);
    }

    #[rstest]
    #[case("afs.ENV", BloomLevel::Synthesis)]
    #[case("afs.FOO", BloomLevel::Analysis)]
    #[case("afs.ENG", BloomLevel::Application)]
    #[case("q-bio.GN", BloomLevel::Knowledge)]
    fn bloom_falls_back_to_primary_category(#[case] categories: &str, #[case] expected: BloomLevel) {
        assert_eq!(determine_bloom_taxonomy(&record("", "", categories)), expected);
    }

    #[test]
    fn bloom_only_first_category_counts() {
        let meta = record("", "", "afs.OTHER afs.ENV");
        assert_eq!(determine_bloom_taxonomy(&meta), BloomLevel::Knowledge);
    }

    #[rstest]
    #[case("we explain it", BloomLevel::Comprehension)]
    #[case("we analyze it", BloomLevel::Analysis)]
    #[case("we evaluate it", BloomLevel::Evaluation)]
    #[case("we identify and evaluate it", BloomLevel::Knowledge)]
    fn bloom_keyword_beats_category(#[case] abstract_text: &str, #[case] expected: BloomLevel) {
        assert_eq!(
            determine_bloom_taxonomy(&record("", abstract_text, "afs.ENV")),
            expected
        );
    }

    #[rstest]
    #[case("afs.OTHER", ExpertiseLevel::Novice)]
    #[case("afs.SOI", ExpertiseLevel::Advanced)]
    #[case("afs.AGR", ExpertiseLevel::Intermediate)]
    #[case("cond-mat.soft", ExpertiseLevel::Intermediate)]
    fn expertise_falls_back_to_primary_category(
        #[case] categories: &str,
        #[case] expected: ExpertiseLevel,
    ) {
        assert_eq!(determine_expertise_level(&record("", "", categories)), expected);
    }

    #[test]
    fn expertise_keyword_beats_technical_count() {
        let meta = record(
            "A tutorial",
            "pcr dna rna protein enzyme metabolite hplc nmr",
            "afs.SOI",
        );
        assert_eq!(determine_expertise_level(&meta), ExpertiseLevel::Novice);
    }

    #[rstest]
    #[case("drone", ExpertiseLevel::Intermediate)]
    #[case("drone crispr hplc", ExpertiseLevel::Advanced)]
    #[case("drone crispr hplc nmr elisa haccp rhizosphere", ExpertiseLevel::Expert)]
    fn expertise_technical_count_beats_category(
        #[case] abstract_text: &str,
        #[case] expected: ExpertiseLevel,
    ) {
        assert_eq!(
            determine_expertise_level(&record("", abstract_text, "afs.OTHER")),
            expected
        );
    }

    #[test]
    fn precision_agriculture_scenario_resolves_advanced() {
        let meta = record(
            "Precision Agriculture Using IoT Sensors for Irrigation",
            "This work combines automation, robotics and artificial intelligence.",
            "afs.ENG",
        );
        assert_eq!(determine_expertise_level(&meta), ExpertiseLevel::Advanced);
    }
}
