// SPDX-License-Identifier: Apache-2.0

use crate::frontmatter::{self, RenderError, TermPage};

use once_cell::sync::Lazy;
use regex::Regex;

/// Section assigned to terms that appear before the first section heading.
pub const UNCATEGORIZED_SECTION: &str = "uncategorized";

/// Glyph appended to a term heading to mark it ready for publication.
pub const COMPLETED_MARKER: char = '✓';

static IN_PROGRESS_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\s*\(in prog(?:ress)?\)\s*").unwrap());
static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s-]").unwrap());
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static HYPHEN_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"-+").unwrap());

/// One glossary entry as parsed from the document.
///
/// Raw fields only; `id`, `clean_name` and friends are derived on demand so
/// they stay consistent with whatever the parser wrote into the record.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Term {
    pub name: String,
    pub section: String,
    pub alternates: Vec<String>,
    pub tags: Vec<String>,
    pub links: Vec<String>,
    pub definition_lines: Vec<String>,
    pub is_completed: bool,
    pub is_in_progress: bool,
}

impl Term {
    /// Creates a term from a heading text, classifying its status markers.
    ///
    /// The completion glyph wins over an in-progress marker when a heading
    /// carries both.
    pub fn new(name: &str, section: &str) -> Self {
        let is_completed = name.contains(COMPLETED_MARKER);
        let upper = name.to_uppercase();
        let has_progress_marker = upper.contains("(IN PROGRESS)") || upper.contains("(IN PROG)");

        if is_completed && has_progress_marker {
            log::warn!(
                "term '{}' carries both '{}' and an in-progress marker, treating it as completed",
                name.trim(),
                COMPLETED_MARKER
            );
        }

        Self {
            name: name.trim().to_owned(),
            section: section.to_owned(),
            is_completed,
            is_in_progress: !is_completed && has_progress_marker,
            ..Self::default()
        }
    }

    /// URL-safe identifier derived from the term name.
    pub fn id(&self) -> String {
        slugify(&self.name)
    }

    pub fn filename(&self) -> String {
        format!("{}.md", self.id())
    }

    /// Term name with the status markers stripped.
    pub fn clean_name(&self) -> String {
        clean_term_name(&self.name)
    }

    /// Explicit tags when present, otherwise a single tag derived from the
    /// section heading.
    pub fn effective_tags(&self) -> Vec<String> {
        if !self.tags.is_empty() {
            return self.tags.clone();
        }
        vec![section_to_tag(&self.section)]
    }

    /// The definition body, trimmed of surrounding blank lines.
    pub fn definition(&self) -> String {
        self.definition_lines.join("\n").trim().to_owned()
    }

    pub fn to_markdown(&self) -> Result<String, RenderError> {
        let id = self.id();
        let name = self.clean_name();
        let tags = self.effective_tags();
        let definition = self.definition();

        frontmatter::render(&TermPage {
            id: &id,
            term: &name,
            tags: &tags,
            alternates: &self.alternates,
            links: &self.links,
            definition: &definition,
        })
    }
}

/// Removes the completion glyph and the in-progress marker spellings.
pub fn clean_term_name(name: &str) -> String {
    let name = name.replace(COMPLETED_MARKER, "");
    IN_PROGRESS_MARKER
        .replace_all(name.trim(), "")
        .trim()
        .to_owned()
}

/// Converts a display name into a URL-safe slug.
///
/// Status markers are stripped first, then everything outside `[\w\s-]` is
/// removed, whitespace runs become single hyphens, hyphen runs collapse and
/// leading/trailing hyphens are trimmed. Idempotent for inputs already in
/// slug form. Inputs of nothing but punctuation yield an empty slug, which
/// the renderer rejects.
pub fn slugify(text: &str) -> String {
    let slug = clean_term_name(text).to_lowercase();
    let slug = NON_WORD.replace_all(&slug, "");
    let slug = WHITESPACE_RUN.replace_all(&slug, "-");
    let slug = HYPHEN_RUN.replace_all(&slug, "-");
    slug.trim_matches('-').to_owned()
}

/// Converts a section heading into its default tag, e.g.
/// "Game Mechanics" -> "game-mechanics".
pub fn section_to_tag(section: &str) -> String {
    let tag = section.to_lowercase();
    let tag = NON_WORD.replace_all(&tag, "");
    let tag = WHITESPACE_RUN.replace_all(&tag, "-");
    tag.trim_matches('-').to_owned()
}
