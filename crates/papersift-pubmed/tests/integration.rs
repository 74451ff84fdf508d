//! Integration tests for papersift-pubmed
//!
//! Tests that hit the live E-utilities endpoints are marked #[ignore].
//! Run with: cargo test -p papersift-pubmed --test integration -- --ignored

use papersift_pubmed::extract::{self, RecordOutcome};
use papersift_pubmed::parser;
use papersift_pubmed::{Config, run};

/// Test a real search-and-fetch round against PubMed
/// Run with: cargo test -p papersift-pubmed --test integration -- --ignored fetch_cancer_papers
#[test]
#[ignore]
fn fetch_cancer_papers() {
    let config = Config {
        max_results: 5,
        ..Default::default()
    };

    let result = run(&config, "cancer treatment").expect("Pipeline should succeed");

    assert!(!result.rows.is_empty(), "Expected at least one row");
    assert!(result.rows.len() <= 5, "retmax should cap the result set");

    for row in &result.rows {
        assert!(!row.pubmed_id.is_empty());
        assert!(!row.title.is_empty());
    }

    let summary = &result.summary;
    assert_eq!(summary.total, result.rows.len());
    assert_eq!(summary.pharma + summary.other, summary.total);
}

/// Test that a query with no hits yields an empty result, not an error
/// Run with: cargo test -p papersift-pubmed --test integration -- --ignored no_results_query
#[test]
#[ignore]
fn no_results_query() {
    let config = Config::default();

    let result = run(&config, "zqxv0000nomatchterm0000").expect("Empty search should succeed");

    assert!(result.rows.is_empty());
    assert_eq!(result.summary.total, 0);
}

/// Test that an unreachable endpoint surfaces a transport error
/// Run with: cargo test -p papersift-pubmed --test integration -- --ignored unreachable_endpoint_fails
#[test]
#[ignore]
fn unreachable_endpoint_fails() {
    let config = Config {
        search_url: "http://127.0.0.1:1/esearch.fcgi".to_string(),
        ..Default::default()
    };

    let result = run(&config, "cancer");
    assert!(result.is_err(), "Expected a transport error");
}

/// End-to-end classification over a canned efetch response, no network
#[test]
fn classify_canned_response() {
    let xml = r#"<?xml version="1.0" ?>
<PubmedArticleSet>
  <PubmedArticle>
    <MedlineCitation>
      <PMID>11111111</PMID>
      <Article>
        <Journal>
          <JournalIssue>
            <PubDate>
              <Year>2023</Year>
            </PubDate>
          </JournalIssue>
        </Journal>
        <ArticleTitle>Antibody therapy outcomes.</ArticleTitle>
        <AuthorList>
          <Author>
            <LastName>Smith</LastName>
            <AffiliationInfo>
              <Affiliation>Genentech Biotech, South San Francisco</Affiliation>
            </AffiliationInfo>
            <CorrespondingYN>Y</CorrespondingYN>
            <Email>smith@genentech.example</Email>
          </Author>
        </AuthorList>
      </Article>
    </MedlineCitation>
  </PubmedArticle>
  <PubmedArticle>
    <MedlineCitation>
      <PMID>22222222</PMID>
      <Article>
        <Journal>
          <JournalIssue>
            <PubDate>
              <Year>2021</Year>
            </PubDate>
          </JournalIssue>
        </Journal>
        <ArticleTitle>Campus cohort follow-up.</ArticleTitle>
        <AuthorList>
          <Author>
            <LastName>Doe</LastName>
            <AffiliationInfo>
              <Affiliation>Department of Medicine, State University</Affiliation>
            </AffiliationInfo>
          </Author>
        </AuthorList>
      </Article>
    </MedlineCitation>
  </PubmedArticle>
</PubmedArticleSet>"#;

    let records = parser::parse_fetch_response(xml).expect("Canned XML should parse");
    assert_eq!(records.len(), 2);

    let rows: Vec<_> = records
        .into_iter()
        .map(|record| match extract::extract_record(record) {
            RecordOutcome::Row(row) => row,
            RecordOutcome::Skipped { pmid, .. } => panic!("unexpected skip for {pmid:?}"),
        })
        .collect();

    assert_eq!(rows[0].pubmed_id, "11111111");
    assert_eq!(rows[0].category.as_str(), "Pharma/Biotech");
    assert_eq!(rows[0].non_academic_authors, "Smith");
    assert_eq!(
        rows[0].company_affiliations,
        "Genentech Biotech, South San Francisco"
    );
    assert_eq!(rows[0].corresponding_email, "smith@genentech.example");

    assert_eq!(rows[1].pubmed_id, "22222222");
    assert_eq!(rows[1].category.as_str(), "Other");
    assert_eq!(rows[1].non_academic_authors, "N/A");
    assert_eq!(rows[1].corresponding_email, "N/A");
}
