//! Main runner for the PubMed fetch pipeline

use std::time::Instant;

use anyhow::Result;
use papersift_core::paper::{Category, PaperRow};

use crate::client;
use crate::config::Config;
use crate::extract::{self, RecordOutcome};
use crate::parser::PubmedRecord;

/// Pipeline execution summary
#[derive(Debug)]
pub struct Summary {
    pub total: usize,
    pub pharma: usize,
    pub other: usize,
    pub skipped: usize,
    pub elapsed: std::time::Duration,
}

/// Classified rows plus the run summary
#[derive(Debug)]
pub struct RunResult {
    pub rows: Vec<PaperRow>,
    pub summary: Summary,
}

#[derive(Debug, Default)]
struct Outcome {
    rows: Vec<PaperRow>,
    skipped: usize,
}

/// Run the pipeline: search for identifiers, fetch the records,
/// classify them into rows.
pub fn run(config: &Config, query: &str) -> Result<RunResult> {
    let start = Instant::now();

    log::info!("Fetching papers for query: {query}");
    let ids = client::search_ids(config, query)?;
    log::debug!("Search returned {} identifiers", ids.len());

    let outcome = resolve(config, &ids)?;

    let elapsed = start.elapsed();
    let summary = summarize(&outcome, elapsed);
    log::debug!(
        "Classified {} rows ({} skipped) in {:.1}s",
        summary.total,
        summary.skipped,
        summary.elapsed.as_secs_f64()
    );

    Ok(RunResult {
        rows: outcome.rows,
        summary,
    })
}

fn resolve(config: &Config, ids: &[String]) -> Result<Outcome> {
    if ids.is_empty() {
        log::info!("No results found.");
        return Ok(Outcome::default());
    }

    let records = client::fetch_records(config, ids)?;
    log::debug!("Fetched {} records", records.len());

    Ok(classify_records(records))
}

fn classify_records(records: Vec<PubmedRecord>) -> Outcome {
    let mut outcome = Outcome::default();

    for record in records {
        match extract::extract_record(record) {
            RecordOutcome::Row(row) => outcome.rows.push(row),
            RecordOutcome::Skipped { pmid, reason } => {
                log::debug!(
                    "Skipping record {}: {}",
                    pmid.as_deref().unwrap_or("<no PMID>"),
                    reason.as_str()
                );
                outcome.skipped += 1;
            }
        }
    }

    outcome
}

fn summarize(outcome: &Outcome, elapsed: std::time::Duration) -> Summary {
    let pharma = outcome
        .rows
        .iter()
        .filter(|row| row.category == Category::PharmaBiotech)
        .count();

    Summary {
        total: outcome.rows.len(),
        pharma,
        other: outcome.rows.len() - pharma,
        skipped: outcome.skipped,
        elapsed,
    }
}
