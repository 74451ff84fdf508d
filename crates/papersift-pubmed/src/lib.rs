//! Papersift PubMed - E-utilities search, fetch, and classification
//!
//! Searches PubMed for a query, resolves the matching identifiers to full
//! records in one batched fetch, and classifies each paper by whether any
//! author is affiliated with a pharma/biotech company.
//!
//! # Example
//!
//! ```ignore
//! use papersift_pubmed::{Config, run};
//!
//! let config = Config {
//!     max_results: 5,
//!     ..Default::default()
//! };
//!
//! let result = run(&config, "cancer immunotherapy")?;
//! println!("{} papers, {} from industry", result.rows.len(), result.summary.pharma);
//! ```

pub mod client;
pub mod config;
pub mod extract;
pub mod parser;
pub mod runner;

// Re-exports
pub use config::Config;
pub use extract::{RecordOutcome, SkipReason};
pub use runner::{RunResult, Summary, run};
