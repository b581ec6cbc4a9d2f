//! # taxon-classify
//!
//! Rule-based classification of paper metadata into educational subtopics.
//!
//! Every attribute is resolved the same way: scan an ordered keyword table
//! against the lower-cased title and abstract, and fall back to the defaults
//! of the record's primary category when nothing matches. All tables are
//! compiled in and never mutated.
//!
//! ```
//! use taxon_classify::convert_metadata;
//! use taxon_core::{GranularityLevel, PaperMetadata};
//!
//! let meta = PaperMetadata::new("A broad review of soil health", "", "afs.SOI");
//! let subtopic = convert_metadata(&meta);
//! assert_eq!(subtopic.granularity_level, GranularityLevel::Coarse);
//! ```

pub mod convert;
pub mod error;
pub mod filters;
pub mod keywords;
pub mod naming;
pub mod resolve;
pub mod tables;
pub mod text;
pub mod topics;

pub use convert::{ConvertOptions, convert_json_str, convert_metadata, convert_record};
pub use error::ClassifyError;
pub use filters::{accepts, is_agriculture_paper, is_physics_paper, is_qbio_paper};
pub use keywords::extract_keywords;
pub use naming::generate_subtopic_name;
pub use resolve::{determine_bloom_taxonomy, determine_expertise_level, determine_granularity};
pub use tables::{CategoryDefinition, category_description, lookup_category};
pub use text::SearchText;
pub use topics::{generate_next_topics, generate_prerequisites};
