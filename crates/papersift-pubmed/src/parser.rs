//! E-utilities XML parsers using quick-xml
//!
//! Event-based parsers for the esearch and efetch response documents.
//! Repeated elements accumulate into vectors, so the single-element and
//! multi-element wire shapes come out identical.

use anyhow::{Context, Result};
use quick_xml::Reader;
use quick_xml::events::Event;

/// One record from an efetch response.
///
/// Levels that can be absent on the wire stay optional here; the
/// extraction layer decides the fallbacks.
#[derive(Debug, Default)]
pub struct PubmedRecord {
    pub pmid: Option<String>,
    pub article: Option<ArticleInfo>,
}

/// Contents of the `<Article>` element.
#[derive(Debug, Default)]
pub struct ArticleInfo {
    pub title: Option<String>,
    /// `Journal > JournalIssue > PubDate > Year`, kept as raw text
    pub pub_year: Option<String>,
    pub authors: Vec<AuthorEntry>,
}

/// One `<Author>` entry.
#[derive(Debug, Default, Clone)]
pub struct AuthorEntry {
    pub last_name: Option<String>,
    pub affiliations: Vec<String>,
    /// Text of the `<CorrespondingYN>` child, normally "Y" or "N"
    pub corresponding: Option<String>,
    pub email: Option<String>,
}

/// Parse an esearch response into the matching identifiers.
///
/// Identifiers are the `<Id>` elements under `<IdList>`. A response
/// without an `IdList` yields an empty list.
pub fn parse_search_response(xml: &str) -> Result<Vec<String>> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut ids = Vec::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) if e.name().as_ref() == b"IdList" => {
                parse_id_list(&mut reader, &mut ids)?;
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(e).context("XML parse error in search response"),
            _ => {}
        }
        buf.clear();
    }

    Ok(ids)
}

/// Parse `<IdList>` block: collect identifier values.
fn parse_id_list(reader: &mut Reader<&[u8]>, ids: &mut Vec<String>) -> Result<()> {
    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) if e.name().as_ref() == b"Id" => {
                let text = reader.read_text(e.name())?;
                let id = text.trim().to_string();
                if !id.is_empty() {
                    ids.push(id);
                }
            }
            Event::End(e) if e.name().as_ref() == b"IdList" => break,
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }
    Ok(())
}

/// Parse an efetch response, one record per `<PubmedArticle>`.
///
/// A record whose inner XML fails to parse is dropped; a malformed
/// document is an error.
pub fn parse_fetch_response(xml: &str) -> Result<Vec<PubmedRecord>> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut records = Vec::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) if e.name().as_ref() == b"PubmedArticle" => {
                match parse_record(&mut reader) {
                    Ok(record) => records.push(record),
                    Err(e) => log::debug!("Failed to parse record: {}", e),
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(e).context("XML parse error in fetch response"),
            _ => {}
        }
        buf.clear();
    }

    Ok(records)
}

fn parse_record(reader: &mut Reader<&[u8]>) -> Result<PubmedRecord> {
    let mut record = PubmedRecord::default();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) if e.name().as_ref() == b"MedlineCitation" => {
                parse_medline_citation(reader, &mut record)?;
            }
            Event::End(e) if e.name().as_ref() == b"PubmedArticle" => break,
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(record)
}

fn parse_medline_citation(reader: &mut Reader<&[u8]>, record: &mut PubmedRecord) -> Result<()> {
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => match e.name().as_ref() {
                // First PMID wins; CommentsCorrections nest their own
                b"PMID" if record.pmid.is_none() => {
                    record.pmid = non_empty(read_text(reader)?);
                }
                b"Article" => record.article = Some(parse_article(reader)?),
                _ => {}
            },
            Event::End(e) if e.name().as_ref() == b"MedlineCitation" => break,
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(())
}

fn parse_article(reader: &mut Reader<&[u8]>) -> Result<ArticleInfo> {
    let mut article = ArticleInfo::default();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => match e.name().as_ref() {
                b"ArticleTitle" => {
                    article.title = non_empty(read_text_content(reader, b"ArticleTitle")?);
                }
                b"Journal" => article.pub_year = parse_journal(reader)?,
                b"AuthorList" => article.authors = parse_author_list(reader)?,
                _ => {}
            },
            Event::End(e) if e.name().as_ref() == b"Article" => break,
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(article)
}

/// Walk `<Journal>` down to the publication year.
///
/// Only `PubDate > Year` is read; MedlineDate-style free-text dates
/// produce no year.
fn parse_journal(reader: &mut Reader<&[u8]>) -> Result<Option<String>> {
    let mut year = None;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) if e.name().as_ref() == b"PubDate" => {
                year = parse_pub_date(reader)?;
            }
            Event::End(e) if e.name().as_ref() == b"Journal" => break,
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(year)
}

fn parse_pub_date(reader: &mut Reader<&[u8]>) -> Result<Option<String>> {
    let mut year = None;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) if e.name().as_ref() == b"Year" => {
                year = non_empty(read_text(reader)?);
            }
            Event::End(e) if e.name().as_ref() == b"PubDate" => break,
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(year)
}

fn parse_author_list(reader: &mut Reader<&[u8]>) -> Result<Vec<AuthorEntry>> {
    let mut authors = Vec::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) if e.name().as_ref() == b"Author" => {
                authors.push(parse_author(reader)?);
            }
            Event::End(e) if e.name().as_ref() == b"AuthorList" => break,
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(authors)
}

fn parse_author(reader: &mut Reader<&[u8]>) -> Result<AuthorEntry> {
    let mut author = AuthorEntry::default();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => match e.name().as_ref() {
                b"LastName" => author.last_name = non_empty(read_text(reader)?),
                b"AffiliationInfo" => {
                    if let Some(aff) = parse_affiliation(reader)? {
                        author.affiliations.push(aff);
                    }
                }
                b"CorrespondingYN" => author.corresponding = non_empty(read_text(reader)?),
                b"Email" => author.email = non_empty(read_text(reader)?),
                _ => {}
            },
            Event::End(e) if e.name().as_ref() == b"Author" => break,
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(author)
}

/// Affiliation text is kept verbatim, empty strings included; they just
/// never match the classifier.
fn parse_affiliation(reader: &mut Reader<&[u8]>) -> Result<Option<String>> {
    let mut affiliation = None;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) if e.name().as_ref() == b"Affiliation" => {
                affiliation = Some(read_text(reader)?);
            }
            Event::End(e) if e.name().as_ref() == b"AffiliationInfo" => break,
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(affiliation)
}

/// Read text content until the next end tag
fn read_text(reader: &mut Reader<&[u8]>) -> Result<String> {
    let mut buf = Vec::new();
    let mut text = String::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Text(e) => text.push_str(&e.unescape()?),
            Event::End(_) => break,
            Event::Start(_) => {
                // Handle nested elements (like <i>, <b>, etc.)
                text.push_str(&read_text(reader)?);
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(text)
}

/// Read text content of a specific element, handling nested tags
fn read_text_content(reader: &mut Reader<&[u8]>, end_tag: &[u8]) -> Result<String> {
    let mut buf = Vec::new();
    let mut text = String::new();
    let mut depth = 1;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Text(e) => text.push_str(&e.unescape()?),
            Event::Start(_) => depth += 1,
            Event::End(e) => {
                depth -= 1;
                if depth == 0 && e.name().as_ref() == end_tag {
                    break;
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(text)
}

fn non_empty(text: String) -> Option<String> {
    if text.is_empty() { None } else { Some(text) }
}
