//! Classification levels and the subject-area filter selector.
//!
//! Granularity and the filter selector serialize lowercase; Bloom and
//! expertise levels keep their capitalized names (`"Knowledge"`, `"Expert"`)
//! because that is the shape downstream consumers of the JSONL output read.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// GranularityLevel
// ---------------------------------------------------------------------------

/// Breadth of a topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum GranularityLevel {
    Coarse,
    Medium,
    Fine,
}

impl GranularityLevel {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Coarse => "coarse",
            Self::Medium => "medium",
            Self::Fine => "fine",
        }
    }
}

impl fmt::Display for GranularityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// BloomLevel
// ---------------------------------------------------------------------------

/// Cognitive-complexity tier of educational content.
///
/// ```text
/// Knowledge < Comprehension < Application < Analysis < Synthesis < Evaluation
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
pub enum BloomLevel {
    Knowledge,
    Comprehension,
    Application,
    Analysis,
    Synthesis,
    Evaluation,
}

impl BloomLevel {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Knowledge => "Knowledge",
            Self::Comprehension => "Comprehension",
            Self::Application => "Application",
            Self::Analysis => "Analysis",
            Self::Synthesis => "Synthesis",
            Self::Evaluation => "Evaluation",
        }
    }
}

impl fmt::Display for BloomLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ExpertiseLevel
// ---------------------------------------------------------------------------

/// Audience sophistication tier.
///
/// ```text
/// Novice < Intermediate < Advanced < Expert
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
pub enum ExpertiseLevel {
    Novice,
    Intermediate,
    Advanced,
    Expert,
}

impl ExpertiseLevel {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Novice => "Novice",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
            Self::Expert => "Expert",
        }
    }
}

impl fmt::Display for ExpertiseLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// SubjectFilter
// ---------------------------------------------------------------------------

/// Which subject-area predicate a batch run applies. Exactly one is active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubjectFilter {
    /// Process every record.
    All,
    /// Physics categories only (astro-ph, cond-mat, hep, quant-ph, ...).
    #[default]
    Physics,
    /// Quantitative biology (`q-bio*`) only.
    Qbio,
    /// Agricultural and food sciences (`afs.*`) only.
    Agriculture,
}

impl SubjectFilter {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Physics => "physics",
            Self::Qbio => "qbio",
            Self::Agriculture => "agriculture",
        }
    }
}

impl fmt::Display for SubjectFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn granularity_serializes_lowercase() {
        let json = serde_json::to_string(&GranularityLevel::Coarse).unwrap();
        assert_eq!(json, "\"coarse\"");
    }

    #[test]
    fn bloom_and_expertise_keep_capitalized_names() {
        assert_eq!(
            serde_json::to_string(&BloomLevel::Synthesis).unwrap(),
            "\"Synthesis\""
        );
        assert_eq!(
            serde_json::to_string(&ExpertiseLevel::Novice).unwrap(),
            "\"Novice\""
        );
    }

    #[test]
    fn display_matches_serde_name() {
        for level in [
            BloomLevel::Knowledge,
            BloomLevel::Comprehension,
            BloomLevel::Application,
            BloomLevel::Analysis,
            BloomLevel::Synthesis,
            BloomLevel::Evaluation,
        ] {
            let json = serde_json::to_string(&level).unwrap();
            assert_eq!(json, format!("\"{level}\""));
        }
    }

    #[test]
    fn levels_are_ordered() {
        assert!(BloomLevel::Knowledge < BloomLevel::Evaluation);
        assert!(ExpertiseLevel::Novice < ExpertiseLevel::Expert);
    }

    #[test]
    fn subject_filter_defaults_to_physics() {
        assert_eq!(SubjectFilter::default(), SubjectFilter::Physics);
        let parsed: SubjectFilter = serde_json::from_str("\"agriculture\"").unwrap();
        assert_eq!(parsed, SubjectFilter::Agriculture);
    }
}
