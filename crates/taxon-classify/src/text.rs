//! Lower-cased search text built from a record's title and abstract.

use taxon_core::PaperMetadata;

/// `"{title} {abstract}"`, lower-cased. All trigger matching runs against it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchText(String);

impl SearchText {
    #[must_use]
    pub fn from_metadata(meta: &PaperMetadata) -> Self {
        Self(format!(
            "{} {}",
            meta.title.to_lowercase(),
            meta.abstract_text.to_lowercase()
        ))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether any trigger occurs as a substring.
    #[must_use]
    pub fn contains_any(&self, triggers: &[&str]) -> bool {
        triggers.iter().any(|trigger| self.0.contains(trigger))
    }

    /// Number of distinct terms present, not their frequency.
    #[must_use]
    pub fn count_present(&self, terms: &[&str]) -> usize {
        terms.iter().filter(|term| self.0.contains(*term)).count()
    }

    /// First level in table order whose triggers match.
    #[must_use]
    pub fn first_match<L: Copy>(&self, table: &[(L, &[&str])]) -> Option<L> {
        table
            .iter()
            .find(|(_, triggers)| self.contains_any(triggers))
            .map(|(level, _)| *level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_title_and_abstract_lowercased() {
        let meta = PaperMetadata::new("Soil HEALTH", "Nitrogen Cycling", "afs.SOI");
        assert_eq!(
            SearchText::from_metadata(&meta).as_str(),
            "soil health nitrogen cycling"
        );
    }

    #[test]
    fn empty_record_is_single_space() {
        let text = SearchText::from_metadata(&PaperMetadata::default());
        assert_eq!(text.as_str(), " ");
        assert!(!text.contains_any(&["a", "b"]));
    }

    #[test]
    fn substring_match_inside_words() {
        let text = SearchText::from_metadata(&PaperMetadata::new("Because", "", ""));
        assert!(text.contains_any(&["use"]));
    }

    #[test]
    fn count_present_ignores_repeats() {
        let text = SearchText::from_metadata(&PaperMetadata::new("dna dna dna rna", "", ""));
        assert_eq!(text.count_present(&["dna", "rna", "pcr"]), 2);
    }

    #[test]
    fn first_match_respects_table_order() {
        let table: &[(u8, &[&str])] = &[(1, &["zeta"]), (2, &["alpha"]), (3, &["zeta"])];
        let text = SearchText::from_metadata(&PaperMetadata::new("alpha zeta", "", ""));
        assert_eq!(text.first_match(table), Some(1));
    }
}
