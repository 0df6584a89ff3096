//! Title-Scout main entry point
//!
//! Fetches the built-in URL list with a small worker pool and prints each
//! page's title as it arrives.

use clap::Parser;
use title_scout::config::Config;
use title_scout::crawler::Orchestrator;
use title_scout::output::ConsoleReporter;
use tracing_subscriber::EnvFilter;

/// Title-Scout: concurrent page-title fetcher
///
/// Fetches a fixed list of URLs with a bounded worker pool under an overall
/// deadline. Results go to stdout as `URL:` / `Title:` pairs; failures and
/// logs go to stderr.
#[derive(Parser, Debug)]
#[command(name = "title-scout")]
#[command(version)]
#[command(about = "Concurrent page-title fetcher", long_about = None)]
struct Cli {
    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error logging
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let config = Config::default();
    let orchestrator = match Orchestrator::new(config) {
        Ok(orchestrator) => orchestrator,
        Err(e) => {
            tracing::error!("Failed to initialize pipeline: {}", e);
            return Err(e.into());
        }
    };

    let mut reporter = ConsoleReporter::stdio();
    let summary = orchestrator.run(&mut reporter).await?;

    if summary.cancelled {
        tracing::warn!(
            "Deadline reached before all URLs were processed ({} abandoned)",
            summary.abandoned()
        );
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// Logs go to stderr so they never interleave with the report on stdout.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("title_scout=warn,error"),
            1 => EnvFilter::new("title_scout=info,warn"),
            2 => EnvFilter::new("title_scout=debug,info"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
