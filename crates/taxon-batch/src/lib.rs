//! # taxon-batch
//!
//! Batch file processor for paper metadata.
//!
//! Reads a JSON array, a single JSON object, or JSON Lines; keeps the records
//! accepted by a [`SubjectFilter`](taxon_core::SubjectFilter); classifies each
//! one; and appends the results to a JSON Lines file every
//! `flush_threshold` records. Without an output path the results are returned
//! in the [`BatchReport`].
//!
//! ```no_run
//! use std::path::Path;
//! use taxon_batch::{BatchOptions, process_file};
//! use taxon_core::SubjectFilter;
//!
//! let options = BatchOptions {
//!     filter: SubjectFilter::Agriculture,
//!     output: Some("subtopics.jsonl".into()),
//!     ..BatchOptions::default()
//! };
//! let report = process_file(Path::new("papers.jsonl"), &options)?;
//! println!("{} of {} papers classified", report.included, report.total_seen);
//! # Ok::<(), taxon_batch::BatchError>(())
//! ```

pub mod error;
pub mod input;
pub mod processor;
pub mod sink;

pub use error::BatchError;
pub use input::{InputShape, Origin};
pub use processor::{
    BatchOptions, BatchReport, DEFAULT_FLUSH_THRESHOLD, NoProgress, ProgressObserver,
    process_file, process_file_with, process_str,
};
pub use sink::JsonlSink;
