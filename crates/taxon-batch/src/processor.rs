//! Batch run: filter, classify, buffer, and flush every record of one input.

use std::path::{Path, PathBuf};

use serde_json::Value;
use taxon_classify::{ConvertOptions, accepts, convert_record};
use taxon_core::{ConversionResult, PaperMetadata, SubjectFilter};
use tracing::{debug, info, warn};

use crate::error::BatchError;
use crate::input::{self, Entry, Origin};
use crate::sink::JsonlSink;

/// Results buffered between flushes unless configured otherwise.
pub const DEFAULT_FLUSH_THRESHOLD: usize = 100;

/// Settings for one batch run.
#[derive(Debug, Clone)]
pub struct BatchOptions {
    pub filter: SubjectFilter,
    /// Flush the buffer every time it holds this many results. Zero is
    /// treated as one.
    pub flush_threshold: usize,
    /// JSON Lines file to append to. Without it every result stays in memory.
    pub output: Option<PathBuf>,
    pub convert: ConvertOptions,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            filter: SubjectFilter::default(),
            flush_threshold: DEFAULT_FLUSH_THRESHOLD,
            output: None,
            convert: ConvertOptions::default(),
        }
    }
}

/// Counters and in-memory results of a finished run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Records read, including filtered-out records and malformed lines.
    pub total_seen: usize,
    /// Records that passed the filter and were classified.
    pub included: usize,
    /// Malformed lines skipped in line-delimited input.
    pub invalid_lines: usize,
    /// Results appended to the output file during this run.
    pub written: usize,
    /// Results not written to disk. Holds everything when there is no output
    /// path, and is empty after a run that had one.
    pub results: Vec<ConversionResult>,
}

/// Hooks for reporting run progress. Every method defaults to a no-op.
pub trait ProgressObserver {
    /// Called after each included record.
    fn on_record(&self, _included: usize) {}

    /// Called each time `included` reaches a multiple of the flush threshold.
    fn on_checkpoint(&self, _included: usize, _written: usize) {}

    /// Called for each skipped malformed line.
    fn on_invalid_line(&self, _line: usize) {}
}

/// Observer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressObserver for NoProgress {}

/// Process the file at `path` without progress reporting.
///
/// # Errors
///
/// See [`process_file_with`].
pub fn process_file(path: &Path, options: &BatchOptions) -> Result<BatchReport, BatchError> {
    process_file_with(path, options, &NoProgress)
}

/// Process the file at `path`, reporting progress to `observer`.
///
/// # Errors
///
/// Returns [`BatchError::InputNotFound`] or [`BatchError::Read`] if the file
/// cannot be read, and any error of [`process_str`].
pub fn process_file_with(
    path: &Path,
    options: &BatchOptions,
    observer: &dyn ProgressObserver,
) -> Result<BatchReport, BatchError> {
    info!(path = %path.display(), filter = %options.filter, "processing file");
    let content = input::read_input(path)?;
    process_str(&content, options, observer)
}

/// Process already-loaded input content.
///
/// Malformed lines in line-delimited input are logged, counted, and skipped.
/// Results flushed before an error stay in the output file.
///
/// # Errors
///
/// Returns [`BatchError::InvalidJsonDocument`] or
/// [`BatchError::UnsupportedShape`] for an unusable document,
/// [`BatchError::Processing`] for a value that is not a metadata object, and
/// [`BatchError::Write`] if a flush fails.
pub fn process_str(
    content: &str,
    options: &BatchOptions,
    observer: &dyn ProgressObserver,
) -> Result<BatchReport, BatchError> {
    let mut run = BatchRun::new(options, observer);
    for entry in input::entries(content)? {
        match entry {
            Entry::Record { value, origin } => run.accept(value, origin)?,
            Entry::Malformed { line, source } => run.skip_line(line, source),
        }
    }
    run.finish()
}

struct BatchRun<'a> {
    options: &'a BatchOptions,
    observer: &'a dyn ProgressObserver,
    sink: Option<JsonlSink>,
    threshold: usize,
    report: BatchReport,
}

impl<'a> BatchRun<'a> {
    fn new(options: &'a BatchOptions, observer: &'a dyn ProgressObserver) -> Self {
        Self {
            options,
            observer,
            sink: options.output.as_ref().map(JsonlSink::new),
            threshold: options.flush_threshold.max(1),
            report: BatchReport::default(),
        }
    }

    fn accept(&mut self, value: Value, origin: Origin) -> Result<(), BatchError> {
        self.report.total_seen += 1;

        let meta: PaperMetadata =
            serde_json::from_value(value).map_err(|source| BatchError::Processing {
                record: origin.to_string(),
                source,
            })?;

        if !accepts(self.options.filter, &meta) {
            debug!(%origin, categories = %meta.categories, "record rejected by filter");
            return Ok(());
        }

        self.report.included += 1;
        let included = self.report.included;
        let result = convert_record(
            &meta,
            || match origin {
                Origin::Line(line) => format!("line_{line}"),
                Origin::Element(_) => format!("item_{included}"),
            },
            self.options.convert,
        );
        debug!(%origin, id = %result.original_id, "classified record");
        self.report.results.push(result);
        self.observer.on_record(included);

        if included % self.threshold == 0 {
            self.checkpoint()?;
        }
        Ok(())
    }

    fn skip_line(&mut self, line: usize, source: serde_json::Error) {
        self.report.total_seen += 1;
        self.report.invalid_lines += 1;
        let err = BatchError::InvalidJsonLine { line, source };
        warn!("{err}");
        self.observer.on_invalid_line(line);
    }

    fn checkpoint(&mut self) -> Result<(), BatchError> {
        let included = self.report.included;
        info!(included, filter = %self.options.filter, "processed {included} matching papers");
        if let Some(sink) = &self.sink {
            self.report.written += sink.append(&self.report.results)?;
            self.report.results.clear();
        }
        self.observer.on_checkpoint(included, self.report.written);
        Ok(())
    }

    fn finish(mut self) -> Result<BatchReport, BatchError> {
        if let Some(sink) = &self.sink {
            let flushed = sink.append(&self.report.results)?;
            if flushed > 0 {
                info!(path = %sink.path().display(), written = self.report.written + flushed, "results saved");
            }
            self.report.written += flushed;
            self.report.results.clear();
        }
        info!(
            total_seen = self.report.total_seen,
            included = self.report.included,
            invalid_lines = self.report.invalid_lines,
            "processing complete"
        );
        Ok(self.report)
    }
}
