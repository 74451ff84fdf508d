//! E-utilities client
//!
//! Builds the esearch and efetch requests and parses their responses.
//! Both are single blocking GETs through the shared HTTP client.

use anyhow::{Context, Result};
use papersift_core::http;

use crate::config::Config;
use crate::parser::{self, PubmedRecord};

/// Entrez database queried by both endpoints.
const DB: &str = "pubmed";

/// Search for identifiers matching a query.
///
/// Returns at most `config.max_results` PMIDs, in relevance order.
pub fn search_ids(config: &Config, query: &str) -> Result<Vec<String>> {
    let retmax = config.max_results.to_string();
    let params = [
        ("db", DB),
        ("term", query),
        ("retmax", retmax.as_str()),
        ("retmode", "xml"),
    ];

    let body =
        http::get_text(&config.search_url, &params).context("Failed to fetch search results")?;
    parser::parse_search_response(&body)
}

/// Fetch full records for the given identifiers in one batched request.
pub fn fetch_records(config: &Config, ids: &[String]) -> Result<Vec<PubmedRecord>> {
    let id_param = ids.join(",");
    let params = [("db", DB), ("id", id_param.as_str()), ("retmode", "xml")];

    let body =
        http::get_text(&config.fetch_url, &params).context("Failed to fetch article records")?;
    parser::parse_fetch_response(&body)
}
