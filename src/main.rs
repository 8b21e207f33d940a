//! arxiv-harvest main entry point
//!
//! This is the command-line interface for the listing crawler and record extractor.

use anyhow::Context;
use arxiv_harvest::config::{load_config_with_hash, Config};
use arxiv_harvest::crawler::run_crawl;
use arxiv_harvest::extract::run_extraction;
use arxiv_harvest::output::{print_crawl_summary, print_extraction_summary};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// arxiv-harvest: crawl a paginated arXiv listing and report its papers
///
/// Without a mode flag the crawl runs first and the extractor then turns every
/// stored page into one Markdown report.
#[derive(Parser, Debug)]
#[command(name = "arxiv-harvest")]
#[command(version = "1.0.0")]
#[command(about = "Crawl a paginated listing and extract its records", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (built-in defaults when omitted)
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Only follow the page chain and store the pages
    #[arg(long, conflicts_with_all = ["extract", "dry_run"])]
    crawl: bool,

    /// Only build the report from already stored pages
    #[arg(long, conflicts_with_all = ["crawl", "dry_run"])]
    extract: bool,

    /// Validate config and show what would run without doing it
    #[arg(long, conflicts_with_all = ["crawl", "extract"])]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("failed to load configuration {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        None => {
            tracing::info!("No configuration file given, using defaults");
            Config::default()
        }
    };

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    if !cli.extract {
        handle_crawl(&config, cli.quiet).await?;
    }

    if !cli.crawl {
        handle_extract(&config, cli.quiet)?;
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("arxiv_harvest=info,warn"),
            1 => EnvFilter::new("arxiv_harvest=debug,info"),
            2 => EnvFilter::new("arxiv_harvest=trace,debug"),
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

/// Handles the --dry-run mode: shows the effective configuration
fn handle_dry_run(config: &Config) {
    println!("=== arxiv-harvest Dry Run ===\n");

    println!("Crawler:");
    println!("  Seed page: {}", config.crawler.seed_page);
    println!("  Output directory: {}", config.crawler.output_dir);
    println!("  Link log: {}", config.crawler.link_log);
    println!("  Site origin: {}", config.crawler.site_origin);
    println!("  Delay between requests: {}ms", config.crawler.delay_ms);
    match config.crawler.request_timeout_secs {
        Some(secs) => println!("  Request timeout: {}s", secs),
        None => println!("  Request timeout: transport default"),
    }
    println!("  User agent: {}", config.crawler.user_agent);

    println!("\nExtractor:");
    println!("  Input directory: {}", config.extractor.input_dir);
    println!("  File extension: .{}", config.extractor.file_extension);
    println!("  Report: {}", config.extractor.report_path);

    println!("\n✓ Configuration is valid");
}

/// Handles the crawl stage
async fn handle_crawl(config: &Config, quiet: bool) -> anyhow::Result<()> {
    tracing::info!(
        "Starting crawl from seed page {}",
        config.crawler.seed_page
    );

    let summary = run_crawl(config).await.context("crawl failed")?;

    if !quiet {
        print_crawl_summary(&summary);
        println!();
    }

    Ok(())
}

/// Handles the extraction stage
fn handle_extract(config: &Config, quiet: bool) -> anyhow::Result<()> {
    tracing::info!(
        "Extracting records from {}",
        config.extractor.input_dir
    );

    let summary = run_extraction(&config.extractor).context("extraction failed")?;

    if !quiet {
        print_extraction_summary(&summary);
    }

    Ok(())
}
