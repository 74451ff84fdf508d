//! Output sinks: CSV file writer and console printer

use std::fs;
use std::io;
use std::path::Path;

use crate::paper::PaperRow;

/// CSV header, column order is fixed.
pub const CSV_COLUMNS: [&str; 7] = [
    "PubmedID",
    "Title",
    "Publication Date",
    "Non-academic Author(s)",
    "Company Affiliation(s)",
    "Corresponding Author Email",
    "Category",
];

/// Write rows as CSV with atomic tmp -> rename.
pub fn write_csv(path: &Path, rows: &[PaperRow]) -> Result<(), io::Error> {
    let file_name = path.file_name().ok_or_else(|| {
        io::Error::new(io::ErrorKind::InvalidInput, "output path has no file name")
    })?;
    let mut tmp_name = file_name.to_os_string();
    tmp_name.push(".tmp");
    let tmp_path = path.with_file_name(tmp_name);

    // Clean up stale tmp file
    if tmp_path.exists() {
        fs::remove_file(&tmp_path)?;
    }

    let mut writer = csv::Writer::from_path(&tmp_path).map_err(io::Error::other)?;
    writer.write_record(CSV_COLUMNS).map_err(io::Error::other)?;
    for row in rows {
        writer
            .write_record([
                row.pubmed_id.as_str(),
                row.title.as_str(),
                row.publication_date.as_str(),
                row.non_academic_authors.as_str(),
                row.company_affiliations.as_str(),
                row.corresponding_email.as_str(),
                row.category.as_str(),
            ])
            .map_err(io::Error::other)?;
    }
    writer.flush()?;
    drop(writer);

    fs::rename(&tmp_path, path)
}

/// Print rows to stdout, one line per paper.
pub fn print_rows(rows: &[PaperRow]) {
    if rows.is_empty() {
        println!("No papers found.");
        return;
    }

    println!("\nFetched Research Papers:");
    for row in rows {
        println!(
            "PubmedID: {}, Title: {}, Date: {}, Category: {}",
            row.pubmed_id, row.title, row.publication_date, row.category
        );
    }
}
