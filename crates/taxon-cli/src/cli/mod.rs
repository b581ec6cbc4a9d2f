use std::ffi::OsString;
use std::path::{Path, PathBuf};

use clap::error::ErrorKind;
use clap::{Arg, CommandFactory, Parser};
use taxon_core::SubjectFilter;

const AFTER_HELP: &str = "\
Examples:
  taxon arxiv_data.json
  taxon arxiv_data.json results.jsonl
  taxon arxiv_data.json results.jsonl --all
  taxon afs_data.jsonl results.jsonl --agri --keywords

Input file formats supported:
  - JSON array: [{...}, {...}, ...]
  - JSON Lines: {...}\\n{...}\\n...
  - Single JSON object: {...}

Logging: set TAXON_LOG (e.g. TAXON_LOG=taxon_batch=debug) to override -q/-v.";

/// Top-level CLI parser for the `taxon` binary.
#[derive(Debug, Parser)]
#[command(
    name = "taxon",
    version,
    about = "Paper metadata to educational subtopic converter",
    after_help = AFTER_HELP,
    arg_required_else_help = true
)]
pub struct Cli {
    /// JSON file containing paper metadata
    pub input_file: PathBuf,

    /// Append results to this JSON Lines file instead of printing a preview
    /// (when several are given the last one is used)
    #[arg(value_name = "OUTPUT_FILE")]
    pub outputs: Vec<PathBuf>,

    /// Process all papers, not just physics papers
    #[arg(long, overrides_with_all = ["qbio", "agri"])]
    pub all: bool,

    /// Process only quantitative biology (q-bio) papers
    #[arg(long, overrides_with_all = ["all", "agri"])]
    pub qbio: bool,

    /// Process only agricultural and food science (afs) papers
    #[arg(long, overrides_with_all = ["all", "qbio"])]
    pub agri: bool,

    /// Attach domain keywords found in title and abstract to each result
    #[arg(long)]
    pub keywords: bool,

    /// Quiet mode (errors only, no progress)
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Output path: the last positional after the input file.
    #[must_use]
    pub fn output_file(&self) -> Option<&Path> {
        self.outputs.last().map(PathBuf::as_path)
    }

    /// Filter chosen on the command line, if any. When several flags are
    /// given the last one has already won during parsing.
    #[must_use]
    pub const fn filter(&self) -> Option<SubjectFilter> {
        if self.all {
            Some(SubjectFilter::All)
        } else if self.qbio {
            Some(SubjectFilter::Qbio)
        } else if self.agri {
            Some(SubjectFilter::Agriculture)
        } else {
            None
        }
    }
}

/// Outcome of argument parsing.
#[derive(Debug)]
pub enum Parsed {
    Run {
        cli: Box<Cli>,
        /// Unrecognized `--` options that were dropped before parsing.
        ignored: Vec<String>,
    },
    /// Usage, version, or an argument error was already printed.
    Exit(i32),
}

/// Parse process arguments.
///
/// `help` as the only argument prints usage like `--help`. Missing arguments
/// print usage and exit 1. Unrecognized `--name` options are dropped and
/// reported back in [`Parsed::Run`] so they can be logged once tracing is up.
pub fn parse_from<I, T>(args: I) -> Parsed
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();

    if args.len() == 2 && args[1] == "help" {
        let _ = Cli::command().print_help();
        return Parsed::Exit(0);
    }

    let (args, ignored) = drop_unknown_options(args);
    match Cli::try_parse_from(args) {
        Ok(cli) => Parsed::Run {
            cli: Box::new(cli),
            ignored,
        },
        Err(error) => {
            let _ = error.print();
            Parsed::Exit(exit_code(error.kind()))
        }
    }
}

fn drop_unknown_options(args: Vec<OsString>) -> (Vec<OsString>, Vec<String>) {
    let command = Cli::command();
    let known: Vec<&str> = command
        .get_arguments()
        .filter_map(Arg::get_long)
        .chain(["help", "version"])
        .collect();

    let mut kept = Vec::with_capacity(args.len());
    let mut ignored = Vec::new();
    for (idx, arg) in args.into_iter().enumerate() {
        if idx > 0
            && let Some(option) = arg.to_str().and_then(|a| a.strip_prefix("--"))
            && !option.is_empty()
            && !known.contains(&option.split_once('=').map_or(option, |(name, _)| name))
        {
            ignored.push(format!("--{option}"));
            continue;
        }
        kept.push(arg);
    }
    (kept, ignored)
}

const fn exit_code(kind: ErrorKind) -> i32 {
    match kind {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => 1,
    }
}
