//! E-utilities endpoint configuration

/// Runtime configuration for the PubMed fetcher
#[derive(Debug, Clone)]
pub struct Config {
    /// esearch endpoint URL
    pub search_url: String,
    /// efetch endpoint URL
    pub fetch_url: String,
    /// Maximum identifiers requested per search
    pub max_results: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            search_url: "https://eutils.ncbi.nlm.nih.gov/entrez/eutils/esearch.fcgi".to_string(),
            fetch_url: "https://eutils.ncbi.nlm.nih.gov/entrez/eutils/efetch.fcgi".to_string(),
            max_results: 10,
        }
    }
}
