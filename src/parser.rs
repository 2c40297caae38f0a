// SPDX-License-Identifier: Apache-2.0

//! Turns the linear sequence of styled paragraphs from the glossary document
//! into discrete term records.
//!
//! The scan carries an explicit state: outside any term, inside the metadata
//! window right below a term heading, or inside the definition body. The
//! metadata window closes permanently on the first blank line or the first
//! line that is not a directive, so a literal "Tags: ..." inside a definition
//! stays definition text.

use crate::metadata;
use crate::term::{Term, UNCATEGORIZED_SECTION};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParagraphStyle {
    /// Top-level heading, names the current section.
    SectionHeading,
    /// Second-level heading, starts a new term.
    TermHeading,
    Body,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph {
    pub style: ParagraphStyle,
    pub text: String,
}

impl Paragraph {
    pub fn new(style: ParagraphStyle, text: impl Into<String>) -> Self {
        Self {
            style,
            text: text.into(),
        }
    }
}

#[derive(Debug)]
enum Scan {
    NoTerm,
    Metadata(Term),
    Body(Term),
}

/// Scans the paragraphs in order and returns the finalized terms in document
/// order. Finalization performs no validation; the renderer rejects
/// ill-formed terms when they are selected for output.
pub fn parse(paragraphs: &[Paragraph]) -> Vec<Term> {
    let mut section = UNCATEGORIZED_SECTION.to_owned();
    let mut terms = Vec::new();
    let mut scan = Scan::NoTerm;

    for paragraph in paragraphs {
        scan = step(scan, paragraph, &mut section, &mut terms);
    }

    match scan {
        Scan::Metadata(term) | Scan::Body(term) => terms.push(term),
        Scan::NoTerm => (),
    }

    terms
}

fn step(scan: Scan, paragraph: &Paragraph, section: &mut String, terms: &mut Vec<Term>) -> Scan {
    let text = paragraph.text.as_str();

    if text.trim().is_empty() {
        return match scan {
            // The first blank line is the metadata/body separator and is not
            // part of the body.
            Scan::Metadata(term) => {
                log::debug!("end of metadata for '{}'", term.clean_name());
                Scan::Body(term)
            }
            Scan::Body(mut term) => {
                term.definition_lines.push(String::new());
                Scan::Body(term)
            }
            Scan::NoTerm => Scan::NoTerm,
        };
    }

    match paragraph.style {
        ParagraphStyle::SectionHeading => {
            *section = text.trim().to_owned();
            log::debug!("section: {section}");
            scan
        }
        ParagraphStyle::TermHeading => {
            if let Scan::Metadata(term) | Scan::Body(term) = scan {
                terms.push(term);
            }
            let term = Term::new(text, section);
            let status = if term.is_completed {
                "completed"
            } else if term.is_in_progress {
                "in progress"
            } else {
                "no status"
            };
            log::debug!("term ({status}): {}", term.clean_name());
            Scan::Metadata(term)
        }
        ParagraphStyle::Body => match scan {
            // Text before the first term heading is discarded.
            Scan::NoTerm => Scan::NoTerm,
            Scan::Metadata(mut term) => match metadata::classify(text) {
                Some(directive) => {
                    log::debug!("metadata for '{}': {directive:?}", term.clean_name());
                    directive.apply(&mut term);
                    Scan::Metadata(term)
                }
                None => {
                    log::debug!("definition starts for '{}'", term.clean_name());
                    term.definition_lines.push(text.to_owned());
                    Scan::Body(term)
                }
            },
            Scan::Body(mut term) => {
                term.definition_lines.push(text.to_owned());
                Scan::Body(term)
            }
        },
    }
}
