//! # taxon-core
//!
//! Core types shared across all Taxon crates:
//! - Classification enums (granularity, Bloom level, expertise level)
//! - Subject-area filter selector
//! - The input paper metadata record
//! - The output subtopic record and its batch envelope

pub mod enums;
pub mod metadata;
pub mod subtopic;

pub use enums::{BloomLevel, ExpertiseLevel, GranularityLevel, SubjectFilter};
pub use metadata::PaperMetadata;
pub use subtopic::{ConversionResult, Subtopic};
