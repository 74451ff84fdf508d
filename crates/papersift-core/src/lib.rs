//! Papersift Core - Common infrastructure for the paper classification pipeline
//!
//! This crate provides the shared pieces the source crates and the CLI
//! build on: HTTP transport, logging, the affiliation classifier, the
//! classified row type, and the output sinks.

pub mod classify;
pub mod http;
pub mod logging;
pub mod paper;
pub mod sink;

// Re-exports for convenience
pub use classify::is_industry_affiliation;
pub use http::{FetchError, get_text};
pub use logging::init_logging;
pub use paper::{Category, NA, PaperRow};
pub use sink::{CSV_COLUMNS, print_rows, write_csv};
