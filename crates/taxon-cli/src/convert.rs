use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use anyhow::Context;
use taxon_batch::{BatchOptions, BatchReport, process_file_with};
use taxon_classify::ConvertOptions;
use taxon_config::TaxonConfig;

use crate::cli::Cli;
use crate::preview::{RULE_WIDTH, filter_label, render_preview};
use crate::progress::Progress;

/// Returned when Ctrl-C arrives before the batch finishes.
#[derive(Debug, thiserror::Error)]
#[error("Processing interrupted by user")]
pub struct Interrupted;

/// Merge command-line flags over configuration.
#[must_use]
pub fn batch_options(cli: &Cli, config: &TaxonConfig) -> BatchOptions {
    BatchOptions {
        filter: cli.filter().unwrap_or(config.batch.default_filter),
        flush_threshold: config.batch.flush_threshold,
        output: cli.output_file().map(Path::to_path_buf),
        convert: ConvertOptions {
            extract_keywords: cli.keywords || config.classify.extract_keywords,
        },
    }
}

pub async fn handle(cli: &Cli, config: &TaxonConfig) -> anyhow::Result<()> {
    let options = batch_options(cli, config);

    println!("Processing file: {}", cli.input_file.display());
    println!("{}", "=".repeat(RULE_WIDTH));

    let progress = Progress::spinner(cli.quiet);
    let report = match run_interruptible(cli.input_file.clone(), options.clone(), progress.clone())
        .await
    {
        Ok(report) => {
            progress.finish_clear();
            report
        }
        Err(error) => {
            progress.finish_err("failed");
            return Err(error);
        }
    };

    print!("{}", render_summary(&report, &options));

    if options.output.is_none() {
        print!(
            "\n{}",
            render_preview(&report.results, config.batch.preview_count)
        );
        println!("\nUse --help for more options");
        println!(
            "To save results: taxon {} output.jsonl",
            cli.input_file.display()
        );
    }
    Ok(())
}

/// Run the batch on a blocking thread and race it against Ctrl-C.
///
/// On interrupt the blocking task is left to die with the process; anything
/// it already flushed stays on disk.
async fn run_interruptible(
    input: PathBuf,
    options: BatchOptions,
    progress: Progress,
) -> anyhow::Result<BatchReport> {
    let task = tokio::task::spawn_blocking(move || process_file_with(&input, &options, &progress));

    tokio::select! {
        joined = task => Ok(joined.context("batch task failed")??),
        signal = tokio::signal::ctrl_c() => {
            signal.context("failed to listen for Ctrl-C")?;
            Err(Interrupted.into())
        }
    }
}

fn render_summary(report: &BatchReport, options: &BatchOptions) -> String {
    let mut out = format!(
        "\nProcessing complete!\n\
         Total papers processed: {}\n\
         {} papers found: {}\n",
        report.total_seen,
        filter_label(options.filter),
        report.included,
    );
    if report.invalid_lines > 0 {
        let _ = writeln!(out, "Invalid lines skipped: {}", report.invalid_lines);
    }
    if let Some(path) = &options.output
        && report.written > 0
    {
        let _ = writeln!(
            out,
            "Results saved to: {} ({} written)",
            path.display(),
            report.written
        );
    }
    out
}
