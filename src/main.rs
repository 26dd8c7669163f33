//! Keyharvest main entry point
//!
//! This is the command-line interface for the keyword-combination search
//! crawler.

use clap::Parser;
use keyharvest::config::{load_config_with_hash, Config};
use keyharvest::crawler::{generate_combinations, Coordinator};
use keyharvest::output::{print_statistics, write_snapshot};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Keyharvest: a keyword-combination search crawler
///
/// Keyharvest enumerates sub-combinations of a base keyword set, queries a
/// search engine for each one, visits the result URLs, and harvests the
/// meta-keywords they declare into a JSON export.
#[derive(Parser, Debug)]
#[command(name = "keyharvest")]
#[command(version = "1.0.0")]
#[command(about = "A keyword-combination search crawler", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show the query plan without fetching
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load and validate configuration
    tracing::info!("Loading configuration from: {}", cli.config.display());
    let (config, _config_hash) = match load_config_with_hash(&cli.config) {
        Ok((cfg, hash)) => {
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            (cfg, hash)
        }
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    if cli.dry_run {
        handle_dry_run(&config);
        Ok(())
    } else {
        handle_crawl(config).await
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("keyharvest=info,warn"),
            1 => EnvFilter::new("keyharvest=debug,info"),
            2 => EnvFilter::new("keyharvest=trace,debug"),
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

/// Handles the --dry-run mode: validates config and shows the query plan
fn handle_dry_run(config: &Config) {
    println!("=== Keyharvest Dry Run ===\n");

    println!("Search:");
    println!("  Base keywords: {:?}", config.search.base_keywords);
    println!("  Join character: {:?}", config.search.join_char);
    println!("  Query URL: {}", config.search.query_url);

    println!("\nFetcher:");
    println!("  Request delay: {}ms", config.fetcher.request_delay_ms);
    println!("  Max retries: {}", config.fetcher.max_retries);
    println!("  Timeout: {}s", config.fetcher.timeout_secs);
    println!("  User agents: {}", config.fetcher.user_agents.len());

    println!("\nOutput:");
    println!("  Export path: {}", config.output.export_path);

    let queries = generate_combinations(&config.search.base_keywords, &config.search.join_char);
    println!("\nQuery plan ({} combinations):", queries.len());
    for (i, query) in queries.iter().enumerate() {
        println!("  {}. {}", i + 1, query);
    }

    println!("\n✓ Configuration is valid");
    println!("✓ Would issue {} search queries", queries.len());
}

/// Handles the main crawl operation
async fn handle_crawl(config: Config) -> anyhow::Result<()> {
    let cancel = Arc::new(AtomicBool::new(false));

    // Ctrl-C requests a graceful stop; partial results are still exported
    {
        let cancel = Arc::clone(&cancel);
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::info!("Interrupt received, stopping and exporting partial results");
                cancel.store(true, Ordering::Relaxed);
            }
        });
    }

    let export_path = PathBuf::from(&config.output.export_path);

    tracing::info!(
        "Starting crawl with {} base keywords",
        config.search.base_keywords.len()
    );

    let coordinator = Coordinator::new(config, cancel)?;
    let snapshot = coordinator.run().await;

    print_statistics(&snapshot.metadata.statistics);

    match write_snapshot(&snapshot, &export_path) {
        Ok(()) => {
            tracing::info!("Crawl completed successfully");
            Ok(())
        }
        Err(e) => {
            tracing::error!("Failed to write export: {}", e);
            Err(e.into())
        }
    }
}
