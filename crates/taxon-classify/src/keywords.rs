//! Keyword trigger tables.
//!
//! Each attribute table is an ordered list of `(level, triggers)` pairs and the
//! order is significant: the first level with any trigger contained in the
//! search text wins. Triggers match as substrings, so `"use"` also fires on
//! `"because"`.

use indexmap::IndexSet;
use taxon_core::{BloomLevel, ExpertiseLevel, GranularityLevel};

/// Granularity triggers, checked coarse, fine, medium.
pub const GRANULARITY_TRIGGERS: &[(GranularityLevel, &[&str])] = &[
    (
        GranularityLevel::Coarse,
        &[
            "review",
            "survey",
            "introduction",
            "overview",
            "general",
            "broad",
            "theory",
            "foundations",
        ],
    ),
    (
        GranularityLevel::Fine,
        &[
            "specific",
            "detailed",
            "precise",
            "particular",
            "exact",
            "measurement",
            "experimental",
            "observation",
        ],
    ),
    (
        GranularityLevel::Medium,
        &[
            "analysis",
            "study",
            "investigation",
            "calculation",
            "method",
            "application",
            "model",
        ],
    ),
];

/// Bloom triggers, checked from Knowledge up to Evaluation.
pub const BLOOM_TRIGGERS: &[(BloomLevel, &[&str])] = &[
    (
        BloomLevel::Knowledge,
        &[
            "definition",
            "list",
            "identify",
            "describe",
            "name",
            "recall",
            "properties",
            "characteristics",
        ],
    ),
    (
        BloomLevel::Comprehension,
        &[
            "explain",
            "understand",
            "interpret",
            "summarize",
            "discuss",
            "mechanisms",
            "processes",
        ],
    ),
    (
        BloomLevel::Application,
        &[
            "apply",
            "calculate",
            "solve",
            "implement",
            "use",
            "demonstrate",
            "simulation",
            "modeling",
        ],
    ),
    (
        BloomLevel::Analysis,
        &[
            "analyze",
            "examine",
            "compare",
            "investigate",
            "determine",
            "effects",
            "behavior",
            "dynamics",
        ],
    ),
    (
        BloomLevel::Synthesis,
        &[
            "create",
            "develop",
            "design",
            "formulate",
            "construct",
            "propose",
            "novel",
            "new",
        ],
    ),
    (
        BloomLevel::Evaluation,
        &[
            "evaluate",
            "assess",
            "judge",
            "validate",
            "critique",
            "test",
            "performance",
            "optimization",
        ],
    ),
];

/// Expertise triggers, checked from Novice up to Expert.
pub const EXPERTISE_TRIGGERS: &[(ExpertiseLevel, &[&str])] = &[
    (
        ExpertiseLevel::Novice,
        &[
            "basic",
            "elementary",
            "simple",
            "introductory",
            "fundamental",
            "primer",
            "tutorial",
        ],
    ),
    (
        ExpertiseLevel::Intermediate,
        &[
            "moderate",
            "standard",
            "conventional",
            "typical",
            "methods",
            "techniques",
        ],
    ),
    (
        ExpertiseLevel::Advanced,
        &[
            "complex",
            "sophisticated",
            "detailed",
            "comprehensive",
            "advanced",
            "precision",
        ],
    ),
    (
        ExpertiseLevel::Expert,
        &[
            "cutting-edge",
            "novel",
            "state-of-the-art",
            "pioneering",
            "breakthrough",
            "frontier",
        ],
    ),
];

/// Technical-complexity vocabulary counted by the expertise resolver when no
/// expertise trigger fires.
pub const TECHNICAL_INDICATORS: &[&str] = &[
    // agricultural technology
    "precision agriculture",
    "smart farming",
    "automation",
    "robotics",
    "artificial intelligence",
    "machine learning",
    "remote sensing",
    "gis",
    "gps",
    "drone",
    "uav",
    "iot",
    "sensor",
    "data analytics",
    "decision support",
    "optimization",
    "modeling",
    "simulation",
    "statistical modeling",
    "regression",
    "correlation",
    "anova",
    // plant science
    "plant breeding",
    "genetics",
    "genomics",
    "marker assisted selection",
    "qtl",
    "gene expression",
    "transgenic",
    "crispr",
    "gene editing",
    "tissue culture",
    "micropropagation",
    "somatic embryogenesis",
    "protoplast",
    "cell culture",
    "molecular biology",
    "pcr",
    "dna",
    "rna",
    "protein",
    "enzyme",
    "metabolite",
    // animal science
    "animal breeding",
    "quantitative genetics",
    "genomic selection",
    "artificial insemination",
    "embryo transfer",
    "reproductive technology",
    "metabolomics",
    "proteomics",
    "nutrigenomics",
    "rumen microbiology",
    "animal nutrition modeling",
    // food science
    "food chemistry",
    "food microbiology",
    "food biotechnology",
    "functional foods",
    "nutraceuticals",
    "food nanotechnology",
    "encapsulation",
    "bioactive compounds",
    "food safety modeling",
    "hazard analysis",
    "haccp",
    "risk assessment",
    "shelf life prediction",
    "quality assurance",
    "sensory evaluation",
    // soil science
    "soil chemistry",
    "soil physics",
    "soil biology",
    "soil microbiology",
    "biogeochemical cycles",
    "nutrient cycling",
    "soil organic matter",
    "soil enzymes",
    "rhizosphere",
    "mycorrhizae",
    "soil-plant interactions",
    "soil carbon sequestration",
    "greenhouse gas emissions",
    // environmental science
    "life cycle assessment",
    "carbon footprint",
    "water footprint",
    "environmental impact assessment",
    "ecosystem services",
    "agroecology",
    "climate change adaptation",
    "mitigation",
    "sustainability assessment",
    "biodiversity conservation",
    "precision conservation",
    // analytical techniques
    "chromatography",
    "spectroscopy",
    "mass spectrometry",
    "microscopy",
    "x-ray diffraction",
    "nmr",
    "ftir",
    "hplc",
    "gc-ms",
    "lc-ms",
    "isotope analysis",
    "elemental analysis",
    "biochemical assays",
    "enzymatic assays",
    "immunoassays",
    "elisa",
    "western blot",
];

/// Content rules for prerequisites: any trigger present adds the topic.
pub const PREREQUISITE_RULES: &[(&[&str], &str)] = &[
    (&["plant", "crop", "breeding"], "Plant biology"),
    (&["soil", "fertility", "nutrient"], "Soil science"),
    (&["animal", "livestock", "dairy"], "Animal science"),
    (&["food", "nutrition", "processing"], "Food science"),
    (
        &["environment", "sustainability", "conservation"],
        "Environmental science",
    ),
    (
        &["machinery", "automation", "engineering"],
        "Engineering fundamentals",
    ),
    (&["economics", "cost", "market"], "Agricultural economics"),
    (&["statistical", "analysis", "modeling"], "Statistics"),
    (&["genetics", "breeding", "molecular"], "Genetics"),
    (&["chemistry", "biochemistry", "chemical"], "Chemistry"),
    (&["microbiology", "pathogen", "disease"], "Microbiology"),
];

/// Agricultural and food science vocabulary for keyword extraction.
#[rustfmt::skip]
pub const DOMAIN_KEYWORDS: &[&str] = &[
    // general agriculture
    "agriculture", "agricultural", "farming", "farm", "crop", "crops", "cultivation", "field",
    "harvest", "yield", "production", "productivity", "agronomy", "agronomic", "planting",
    "seeding", "sowing", "irrigation", "fertilizer", "pesticide", "herbicide", "fungicide",
    "weed", "pest", "disease", "pathogen", "integrated pest management", "ipm", "organic",
    "sustainable", "precision agriculture", "smart farming", "mechanization", "tillage",
    // soil science
    "soil", "soils", "soil fertility", "soil health", "soil quality", "soil chemistry",
    "soil biology", "soil physics", "soil erosion", "soil conservation", "soil management",
    "pedology", "edaphology", "nutrient", "nutrients", "nitrogen", "phosphorus", "potassium",
    "organic matter", "humus", "compost", "mineralization", "nitrification", "ph", "cation",
    "anion", "soil texture", "soil structure", "porosity", "bulk density", "water holding",
    // plant science
    "plant", "plants", "botany", "plant breeding", "plant genetics", "plant physiology",
    "plant pathology", "plant biology", "seed", "seeds", "germination", "seedling",
    "photosynthesis", "transpiration", "respiration", "growth", "development", "flowering",
    "fruit", "vegetable", "grain", "cereal", "legume", "root", "stem", "leaf", "flower",
    "pollination", "fertilization", "gene", "genome", "genotype", "phenotype", "trait",
    "variety", "cultivar", "hybrid", "mutation", "selection", "marker", "qtl",
    // animal science
    "livestock", "cattle", "dairy", "beef", "cow", "bull", "calf", "pig", "swine", "pork",
    "sheep", "lamb", "goat", "poultry", "chicken", "hen", "rooster", "turkey", "duck",
    "animal", "animals", "animal science", "animal husbandry", "animal breeding",
    "animal nutrition", "animal health", "animal welfare", "veterinary", "feed", "feeding",
    "pasture", "grazing", "forage", "silage", "hay", "protein", "energy", "metabolism",
    "reproduction", "genetics", "milk", "meat", "egg", "wool", "fiber",
    // horticulture
    "horticulture", "horticultural", "garden", "gardening", "greenhouse", "nursery",
    "orchard", "vineyard", "landscape", "landscaping", "floriculture", "ornamental",
    "flower", "flowers", "tree", "trees", "shrub", "shrubs", "turfgrass", "lawn",
    "pruning", "grafting", "propagation", "cutting", "tissue culture", "hydroponics",
    "aquaponics", "urban agriculture", "vertical farming", "controlled environment",
    // food science
    "food", "foods", "food science", "food technology", "food safety", "food quality",
    "food processing", "food preservation", "nutrition", "nutritional", "diet", "dietary",
    "vitamin", "mineral", "carbohydrate", "fat", "lipid", "amino acid", "antioxidant",
    "functional food", "nutraceutical", "fermentation", "microbiology", "pathogen",
    "spoilage", "shelf life", "packaging", "storage", "refrigeration", "freezing",
    "dehydration", "canning", "pasteurization", "sterilization", "irradiation",
    // environment and sustainability
    "environment", "environmental", "sustainability", "sustainable", "conservation",
    "ecosystem", "biodiversity", "climate", "climate change", "greenhouse gas",
    "carbon", "carbon footprint", "water", "water management", "drought", "flooding",
    "renewable", "bioenergy", "biomass", "biofuel", "agroecology", "agroforestry",
    "permaculture", "regenerative", "circular economy", "life cycle assessment",
    // agricultural engineering
    "agricultural engineering", "machinery", "equipment", "tractor", "combine",
    "harvester", "planter", "cultivator", "sprayer", "automation", "robotics",
    "sensor", "gps", "gis", "remote sensing", "drone", "uav", "internet of things",
    "iot", "artificial intelligence", "machine learning", "data analytics",
    "decision support system", "farm management software",
    // research methods
    "experiment", "experimental", "trial", "field trial", "laboratory", "analysis",
    "statistical", "statistics", "modeling", "simulation", "optimization",
    "correlation", "regression", "variance", "anova", "randomized", "treatment",
    "control", "replication", "sampling", "measurement", "instrumentation",
    "chromatography", "spectroscopy", "microscopy", "pcr", "elisa", "dna",
    "rna", "protein", "enzyme", "metabolite", "biomarker", "phenotyping",
    // economics and policy
    "economics", "economic", "cost", "benefit", "profit", "income", "market",
    "price", "trade", "export", "import", "policy", "regulation", "subsidy",
    "insurance", "risk", "management", "supply chain", "value chain",
    "agribusiness", "cooperative", "rural development", "food security",
    "poverty", "smallholder", "farmer", "producer", "consumer",
];

/// Domain keywords contained in `text` (case-insensitive), in vocabulary order
/// without repeats.
#[must_use]
pub fn extract_keywords(text: &str) -> Vec<&'static str> {
    let lowered = text.to_lowercase();
    DOMAIN_KEYWORDS
        .iter()
        .copied()
        .filter(|keyword| lowered.contains(keyword))
        .collect::<IndexSet<_>>()
        .into_iter()
        .collect()
}
