//! Record flattening and classification
//!
//! Turns one parsed record into one output row, applying the sentinel
//! fallbacks and the affiliation classifier.

use papersift_core::classify::is_industry_affiliation;
use papersift_core::paper::{Category, NA, PaperRow};

use crate::parser::PubmedRecord;

/// Why a record produced no row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The record carried no `<Article>` payload
    MissingArticle,
}

impl SkipReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MissingArticle => "missing Article element",
        }
    }
}

/// Outcome of extracting one record: a row, or a described skip.
#[derive(Debug)]
pub enum RecordOutcome {
    Row(PaperRow),
    Skipped {
        pmid: Option<String>,
        reason: SkipReason,
    },
}

/// Flatten a record into a classified row.
///
/// Missing scalar fields fall back to their sentinels independently. A
/// record without an `<Article>` element is skipped rather than emitted
/// as an all-sentinel row.
pub fn extract_record(record: PubmedRecord) -> RecordOutcome {
    let Some(article) = record.article else {
        return RecordOutcome::Skipped {
            pmid: record.pmid,
            reason: SkipReason::MissingArticle,
        };
    };

    let pubmed_id = record.pmid.unwrap_or_else(|| NA.to_string());
    let title = article.title.unwrap_or_else(|| "Unknown Title".to_string());
    let publication_date = article.pub_year.unwrap_or_else(|| "Unknown".to_string());

    let mut category = Category::Other;
    let mut non_academic_authors: Vec<String> = Vec::new();
    let mut company_affiliations: Vec<String> = Vec::new();
    let mut corresponding_email: Option<String> = None;

    for author in &article.authors {
        for affiliation in &author.affiliations {
            if is_industry_affiliation(affiliation) {
                let last_name = author
                    .last_name
                    .clone()
                    .unwrap_or_else(|| "Unknown".to_string());
                non_academic_authors.push(last_name);
                company_affiliations.push(affiliation.clone());
                category = Category::PharmaBiotech;
            }
        }

        // Last corresponding author wins, even without an email
        if author.corresponding.as_deref() == Some("Y") {
            corresponding_email = Some(author.email.clone().unwrap_or_else(|| NA.to_string()));
        }
    }

    RecordOutcome::Row(PaperRow {
        pubmed_id,
        title,
        publication_date,
        non_academic_authors: join_or_na(&non_academic_authors),
        company_affiliations: join_or_na(&company_affiliations),
        corresponding_email: corresponding_email.unwrap_or_else(|| NA.to_string()),
        category,
    })
}

fn join_or_na(values: &[String]) -> String {
    if values.is_empty() {
        NA.to_string()
    } else {
        values.join(", ")
    }
}
