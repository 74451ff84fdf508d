//! Classified paper rows

/// Sentinel for fields with no usable source value.
pub const NA: &str = "N/A";

/// Paper classification by author affiliation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    PharmaBiotech,
    Other,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PharmaBiotech => "Pharma/Biotech",
            Self::Other => "Other",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One classified paper, ready for a sink.
///
/// String fields carry sentinels rather than options: missing values are
/// already folded to "N/A", "Unknown Title", or "Unknown" upstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaperRow {
    pub pubmed_id: String,
    pub title: String,
    pub publication_date: String,
    /// Comma-joined last names of authors with a matching affiliation
    pub non_academic_authors: String,
    /// Comma-joined matching affiliation strings, paired with the names
    pub company_affiliations: String,
    pub corresponding_email: String,
    pub category: Category,
}
