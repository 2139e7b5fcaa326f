//! Doclink main entry point
//!
//! Command-line interface for the office-document hyperlink auditor.

use anyhow::Context as _;
use clap::Parser;
use doclink::config::load_config_or_default;
use doclink::report::{open_report, write_report};
use doclink::{scan_documents, Matchers, Validator};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Doclink: an office-document hyperlink auditor
///
/// Doclink scans a directory tree for .docx and .pptx packages, extracts the
/// hyperlinks recorded in each document's relationship manifest, probes every
/// link concurrently, and writes an HTML report of the results.
#[derive(Parser, Debug)]
#[command(name = "doclink")]
#[command(version)]
#[command(about = "Audits office documents for broken hyperlinks", long_about = None)]
struct Cli {
    /// Directory to scan (defaults to the current working directory)
    #[arg(value_name = "ROOT")]
    root: Option<PathBuf>,

    /// Path to an optional TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Probe timeout in seconds
    #[arg(short, long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Maximum number of probes in flight at once
    #[arg(long, value_name = "N")]
    concurrency: Option<usize>,

    /// Probe mailto targets instead of filtering them out
    #[arg(long)]
    keep_mailto: bool,

    /// Do not open the report in the default viewer
    #[arg(long)]
    no_open: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load configuration and apply command-line overrides
    let mut config =
        load_config_or_default(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(root) = cli.root {
        config.scan.root = root;
    }
    if let Some(timeout) = cli.timeout {
        config.probe.timeout_secs = timeout;
        config.probe.connect_timeout_secs = config.probe.connect_timeout_secs.min(timeout);
    }
    if let Some(concurrency) = cli.concurrency {
        config.probe.max_concurrent_probes = concurrency;
    }
    if cli.keep_mailto {
        config.filter.exclude_mailto = false;
    }
    if cli.no_open {
        config.report.open_after_write = false;
    }
    doclink::config::validate(&config).context("Invalid configuration")?;

    // Compiled once, passed explicitly into scanning and extraction
    let matchers = Matchers::compile().context("Failed to compile manifest patterns")?;

    tracing::info!("Scanning {} for documents", config.scan.root.display());
    let documents = scan_documents(&config.scan.root, &matchers, &config.filter);
    tracing::info!("Found {} documents", documents.len());

    // Probe every link and aggregate validity
    let started = std::time::Instant::now();
    let validator =
        Validator::new(&config.probe).context("Failed to build the HTTP client")?;
    let report = validator
        .validate(documents, vec![config.scan.root.clone()])
        .await;
    tracing::info!(
        "Validation finished in {:.2?}: {}",
        started.elapsed(),
        if report.all_valid {
            "all documents valid".to_string()
        } else {
            format!("{} broken links", report.broken_links.len())
        }
    );

    // Report write failure is the one fatal outcome of a completed run
    write_report(&report, &config.report.output_path).with_context(|| {
        format!(
            "Failed to write report to {}",
            config.report.output_path.display()
        )
    })?;
    tracing::info!("Report written to {}", config.report.output_path.display());

    if config.report.open_after_write {
        open_report(&config.report.output_path);
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("doclink=info,warn"),
            1 => EnvFilter::new("doclink=debug,info"),
            2 => EnvFilter::new("doclink=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
