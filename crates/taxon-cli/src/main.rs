use anyhow::Context;
use taxon_config::TaxonConfig;

mod cli;
mod convert;
mod preview;
mod progress;

#[tokio::main]
async fn main() {
    let (cli, ignored) = match cli::parse_from(std::env::args_os()) {
        cli::Parsed::Run { cli, ignored } => (cli, ignored),
        cli::Parsed::Exit(code) => std::process::exit(code),
    };

    if let Err(error) = run(&cli, &ignored).await {
        if error.is::<convert::Interrupted>() {
            eprintln!("\n{error}");
        } else {
            eprintln!("taxon error: {error:#}");
        }
        std::process::exit(1);
    }
}

async fn run(cli: &cli::Cli, ignored: &[String]) -> anyhow::Result<()> {
    init_tracing(cli.quiet, cli.verbose)?;
    for option in ignored {
        tracing::warn!(%option, "ignoring unrecognized option");
    }

    let config = TaxonConfig::load_with_dotenv().context("failed to load taxon configuration")?;
    tracing::debug!(?config, "configuration loaded");

    convert::handle(cli, &config).await
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("TAXON_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
