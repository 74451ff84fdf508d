//! Affiliation classification
//!
//! A paper counts as industry-sponsored when any author affiliation
//! contains one of the marker substrings, case-insensitively.

/// Substrings marking a commercial pharma/biotech affiliation.
const INDUSTRY_MARKERS: [&str; 2] = ["pharma", "biotech"];

/// Case-insensitive substring match against the industry markers.
pub fn is_industry_affiliation(affiliation: &str) -> bool {
    let lower = affiliation.to_lowercase();
    INDUSTRY_MARKERS.iter().any(|marker| lower.contains(marker))
}
