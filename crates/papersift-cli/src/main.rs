//! papersift - Fetch PubMed papers and flag pharma/biotech-affiliated authors
//!
//! Searches PubMed with a user query, classifies each paper by author
//! affiliation, and writes the rows to CSV or the console.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};

mod config;

use config::Config;

#[derive(Parser)]
#[command(name = "papersift")]
#[command(about = "Fetch PubMed papers and flag pharma/biotech-affiliated authors")]
#[command(version)]
struct Cli {
    /// Search query (PubMed term syntax)
    query: Option<String>,

    /// Write results to this CSV file instead of the console
    #[arg(short, long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Maximum number of papers to fetch
    #[arg(short, long, value_name = "N")]
    max_results: Option<u32>,

    /// Config file path (default: ./papersift.toml or ~/.config/papersift/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    papersift_core::init_logging(cli.debug);
    if cli.debug {
        log::debug!("Debug mode enabled.");
    }

    // No query: show usage and exit cleanly
    let Some(query) = cli.query.as_deref() else {
        Cli::command().print_help()?;
        return Ok(());
    };

    // Load configuration
    let config = if let Some(path) = cli.config {
        Config::from_file(&path)?
    } else {
        Config::load()?
    };

    let mut pubmed = config.to_pubmed();
    if let Some(max) = cli.max_results {
        pubmed.max_results = max;
    }

    match &cli.file {
        Some(path) => log::info!("Results will be saved to {}", path.display()),
        None => log::info!("Results will be printed to the console."),
    }

    let result = papersift_pubmed::run(&pubmed, query)?;

    match &cli.file {
        Some(path) => {
            papersift_core::write_csv(path, &result.rows)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            log::info!("Results saved to {}", path.display());
        }
        None => papersift_core::print_rows(&result.rows),
    }

    log::info!("Pharma/Biotech Papers: {}", result.summary.pharma);
    log::info!("Other Papers: {}", result.summary.other);

    Ok(())
}
