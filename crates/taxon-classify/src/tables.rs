//! Category table: per-code default attributes and topic lists.

use taxon_core::{BloomLevel, ExpertiseLevel, GranularityLevel};

/// Code used when a record carries no categories at all.
pub const FALLBACK_CATEGORY: &str = "afs.OTHER";

/// Granularity for a primary category missing from the table.
pub const UNKNOWN_GRANULARITY: GranularityLevel = GranularityLevel::Medium;
/// Bloom level for a primary category missing from the table.
pub const UNKNOWN_BLOOM: BloomLevel = BloomLevel::Knowledge;
/// Expertise level for a primary category missing from the table.
pub const UNKNOWN_EXPERTISE: ExpertiseLevel = ExpertiseLevel::Intermediate;

/// Default attributes of one subject category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryDefinition {
    pub code: &'static str,
    pub granularity: GranularityLevel,
    pub bloom: BloomLevel,
    pub expertise: ExpertiseLevel,
    pub prerequisites: &'static [&'static str],
    pub next_topics: &'static [&'static str],
}

/// Agricultural and Food Sciences categories.
pub const CATEGORY_TABLE: &[CategoryDefinition] = &[
    CategoryDefinition {
        code: "afs",
        granularity: GranularityLevel::Coarse,
        bloom: BloomLevel::Knowledge,
        expertise: ExpertiseLevel::Intermediate,
        prerequisites: &["Biology basics", "Chemistry basics", "Environmental science"],
        next_topics: &[
            "Sustainable agriculture",
            "Food security",
            "Agricultural technology",
            "Rural development",
        ],
    },
    CategoryDefinition {
        code: "afs.AGR",
        granularity: GranularityLevel::Medium,
        bloom: BloomLevel::Application,
        expertise: ExpertiseLevel::Intermediate,
        prerequisites: &[
            "Plant biology",
            "Soil science",
            "Climate science",
            "Economics basics",
        ],
        next_topics: &[
            "Precision agriculture",
            "Crop management",
            "Sustainable farming",
            "Agricultural economics",
            "Farm management",
        ],
    },
    CategoryDefinition {
        code: "afs.HOR",
        granularity: GranularityLevel::Fine,
        bloom: BloomLevel::Application,
        expertise: ExpertiseLevel::Intermediate,
        prerequisites: &["Plant biology", "Soil science", "Plant pathology", "Botany"],
        next_topics: &[
            "Greenhouse management",
            "Fruit production",
            "Vegetable cultivation",
            "Ornamental horticulture",
            "Post-harvest technology",
        ],
    },
    CategoryDefinition {
        code: "afs.ANI",
        granularity: GranularityLevel::Medium,
        bloom: BloomLevel::Application,
        expertise: ExpertiseLevel::Intermediate,
        prerequisites: &[
            "Animal biology",
            "Veterinary science",
            "Nutrition",
            "Genetics",
        ],
        next_topics: &[
            "Animal breeding",
            "Livestock management",
            "Animal welfare",
            "Dairy science",
            "Meat science",
        ],
    },
    CategoryDefinition {
        code: "afs.FOO",
        granularity: GranularityLevel::Fine,
        bloom: BloomLevel::Analysis,
        expertise: ExpertiseLevel::Advanced,
        prerequisites: &["Chemistry", "Microbiology", "Nutrition", "Food safety"],
        next_topics: &[
            "Food processing",
            "Food preservation",
            "Food quality control",
            "Nutritional science",
            "Food biotechnology",
        ],
    },
    CategoryDefinition {
        code: "afs.SOI",
        granularity: GranularityLevel::Fine,
        bloom: BloomLevel::Analysis,
        expertise: ExpertiseLevel::Advanced,
        prerequisites: &[
            "Chemistry",
            "Geology",
            "Microbiology",
            "Environmental science",
        ],
        next_topics: &[
            "Soil chemistry",
            "Soil fertility management",
            "Soil conservation",
            "Soil microbiology",
            "Pedology",
        ],
    },
    CategoryDefinition {
        code: "afs.PLA",
        granularity: GranularityLevel::Medium,
        bloom: BloomLevel::Analysis,
        expertise: ExpertiseLevel::Advanced,
        prerequisites: &[
            "Botany",
            "Genetics",
            "Plant physiology",
            "Molecular biology",
        ],
        next_topics: &[
            "Plant breeding",
            "Crop improvement",
            "Plant pathology",
            "Plant biotechnology",
            "Seed science",
        ],
    },
    CategoryDefinition {
        code: "afs.ENV",
        granularity: GranularityLevel::Medium,
        bloom: BloomLevel::Synthesis,
        expertise: ExpertiseLevel::Advanced,
        prerequisites: &[
            "Ecology",
            "Environmental science",
            "Systems thinking",
            "Statistics",
        ],
        next_topics: &[
            "Sustainable agriculture",
            "Agroecology",
            "Climate change adaptation",
            "Biodiversity conservation",
            "Environmental impact assessment",
        ],
    },
    CategoryDefinition {
        code: "afs.ENG",
        granularity: GranularityLevel::Fine,
        bloom: BloomLevel::Application,
        expertise: ExpertiseLevel::Advanced,
        prerequisites: &[
            "Engineering fundamentals",
            "Mechanical engineering",
            "Electronics",
            "Computer science",
        ],
        next_topics: &[
            "Precision agriculture",
            "Agricultural robotics",
            "Irrigation systems",
            "Farm automation",
            "Agricultural machinery design",
        ],
    },
    CategoryDefinition {
        code: "afs.OTHER",
        granularity: GranularityLevel::Coarse,
        bloom: BloomLevel::Knowledge,
        expertise: ExpertiseLevel::Novice,
        prerequisites: &["General science", "Agriculture basics"],
        next_topics: &[
            "Emerging topics in agricultural sciences",
            "Interdisciplinary approaches",
            "Agricultural policy",
            "Rural sociology",
        ],
    },
];

/// Look up a category code (case-sensitive).
#[must_use]
pub fn lookup_category(code: &str) -> Option<&'static CategoryDefinition> {
    CATEGORY_TABLE.iter().find(|def| def.code == code)
}

/// Human-readable name for a category code. Unknown codes are returned as-is.
#[must_use]
pub fn category_description(code: &str) -> &str {
    match code {
        "afs.AGR" => "Agricultural Sciences",
        "afs.AFS" => "Agricultural and Food Sciences",
        "afs.ANI" => "Animal Sciences",
        "afs.ENV" => "Environmental Sciences",
        "afs.ENG" => "Engineering in Agriculture",
        "afs.FOO" => "Food Sciences",
        "afs.HOR" => "Horticulture",
        "afs.PLA" => "Plant Sciences",
        "afs.SOI" => "Soil Sciences",
        "afs.OTHER" => "Other Agricultural Sciences",
        other => other,
    }
}
