// SPDX-License-Identifier: Apache-2.0

//! The document path: fetch the glossary doc, run the paragraph parser,
//! keep the completed terms and write one markdown file each.

use crate::config::Config;
use crate::error::TermsyncError;
use crate::gdoc;
use crate::parser;
use crate::report::RunReport;
use crate::term::Term;

use std::fs;
use std::path::Path;

pub fn sync(config: &Config, dry_run: bool) -> Result<RunReport, TermsyncError> {
    if !config.output_dir.is_dir() {
        return Err(TermsyncError::OutputDirMissing(config.output_dir.clone()));
    }

    log::info!("fetching document {}", config.doc_id);
    let doc = gdoc::fetch(config)?;
    log::info!("fetched: {}", doc.title);

    let paragraphs = doc.paragraphs(&config.tab_name)?;
    let terms = parser::parse(&paragraphs);

    let completed: Vec<&Term> = terms.iter().filter(|term| term.is_completed).collect();
    let in_progress = terms.iter().filter(|term| term.is_in_progress).count();
    let no_status = terms.len() - completed.len() - in_progress;

    log::info!(
        "found {} terms: {} completed, {} in progress (skipped), {} without status (skipped)",
        terms.len(),
        completed.len(),
        in_progress,
        no_status
    );

    let mut report = write_terms(&completed, &config.output_dir, dry_run);
    report.skipped += in_progress + no_status;

    Ok(report)
}

/// Writes one file per term, silently overwriting existing ones. A failing
/// term is recorded and the remaining terms are still written.
pub fn write_terms(terms: &[&Term], output_dir: &Path, dry_run: bool) -> RunReport {
    let mut report = RunReport::default();

    for term in terms {
        let filename = term.filename();

        let content = match term.to_markdown() {
            Ok(content) => content,
            Err(err) => {
                report.record_error(format!("{}: {err}", term.clean_name()));
                continue;
            }
        };

        if dry_run {
            log::info!("[dry run] would write {filename}");
            report.written += 1;
            continue;
        }

        match fs::write(output_dir.join(&filename), content) {
            Ok(()) => {
                log::info!("wrote {filename}");
                report.written += 1;
            }
            Err(err) => report.record_error(format!("{filename}: {err}")),
        }
    }

    report
}
