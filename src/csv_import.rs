// SPDX-License-Identifier: Apache-2.0

//! Imports terms from a tabular CSV export. The rows already carry filename,
//! id and tags, so this path bypasses the document parser and slug
//! generation entirely and goes straight to the frontmatter renderer.

use crate::error::TermsyncError;
use crate::frontmatter::{self, TermPage};
use crate::metadata;
use crate::report::RunReport;

use serde::Deserialize;

use std::fs;
use std::path::Path;

const REQUIRED_COLUMNS: [&str; 6] = ["filename", "id", "term", "tags", "definition", "writing status"];

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CsvRow {
    filename: String,
    id: String,
    term: String,
    tags: String,
    definition: String,
    #[serde(rename = "writing status")]
    writing_status: String,
    alternates: String,
    manual_links: String,
}

/// Reads the CSV and writes one markdown file per row whose writing status
/// is "completed". Other rows are skipped, rows with missing required fields
/// or failing writes are recorded as errors and the batch continues.
pub fn import(csv_path: &Path, output_dir: &Path) -> Result<RunReport, TermsyncError> {
    if !output_dir.is_dir() {
        return Err(TermsyncError::OutputDirMissing(output_dir.to_path_buf()));
    }
    if !csv_path.exists() {
        return Err(TermsyncError::CsvFileDoesNotExist(csv_path.to_path_buf()));
    }

    log::info!("importing terms from {:?}", csv_path);

    let mut reader = csv::Reader::from_path(csv_path)?;

    let headers = reader.headers()?.clone();
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|column| !headers.iter().any(|header| header == **column))
        .map(|column| (*column).to_owned())
        .collect();
    if !missing.is_empty() {
        return Err(TermsyncError::CsvMissingColumns(missing));
    }

    let mut report = RunReport::default();

    // data starts at row 2, the header is row 1
    for (index, row) in reader.deserialize::<CsvRow>().enumerate() {
        let row_number = index + 2;

        let row = match row {
            Ok(row) => row,
            Err(err) => {
                report.record_error(format!("row {row_number}: {err}"));
                continue;
            }
        };

        if !row.writing_status.trim().eq_ignore_ascii_case("completed") {
            report.skipped += 1;
            continue;
        }

        match write_row(&row, output_dir) {
            Ok(filename) => {
                log::info!("wrote {filename}");
                report.written += 1;
            }
            Err(message) => report.record_error(format!("row {row_number}: {message}")),
        }
    }

    Ok(report)
}

fn write_row(row: &CsvRow, output_dir: &Path) -> Result<String, String> {
    validate_row(row)?;

    let mut filename = row.filename.trim().to_owned();
    if !filename.ends_with(".md") {
        filename.push_str(".md");
    }

    let tags = metadata::split_list(&row.tags);
    let alternates = metadata::split_list(&row.alternates);
    let links = metadata::split_list(&row.manual_links);

    let content = frontmatter::render(&TermPage {
        id: row.id.trim(),
        term: row.term.trim(),
        tags: &tags,
        alternates: &alternates,
        links: &links,
        definition: row.definition.trim(),
    })
    .map_err(|err| err.to_string())?;

    fs::write(output_dir.join(&filename), content)
        .map_err(|err| format!("error writing {filename}: {err}"))?;

    Ok(filename)
}

fn validate_row(row: &CsvRow) -> Result<(), String> {
    let required = [
        ("filename", &row.filename),
        ("id", &row.id),
        ("term", &row.term),
        ("tags", &row.tags),
        ("definition", &row.definition),
    ];

    let missing: Vec<&str> = required
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| *name)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(format!("missing required fields: {}", missing.join(", ")))
    }
}
