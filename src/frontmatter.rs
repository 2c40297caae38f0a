// SPDX-License-Identifier: Apache-2.0

use thiserror::Error;

/// Everything the site needs to render one term page.
///
/// Both input paths funnel into this view: the document parser derives the
/// fields from a [`crate::term::Term`], the CSV importer takes them straight
/// from the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermPage<'a> {
    pub id: &'a str,
    pub term: &'a str,
    pub tags: &'a [String],
    pub alternates: &'a [String],
    pub links: &'a [String],
    pub definition: &'a str,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RenderError {
    #[error("term has an empty name")]
    EmptyName,
    #[error("name '{0}' normalizes to an empty id")]
    EmptyId(String),
    #[error("term '{0}' has no tags")]
    NoTags(String),
    #[error("term '{0}' has an empty definition")]
    EmptyDefinition(String),
}

type RenderResult<T> = std::result::Result<T, RenderError>;

/// Renders the YAML frontmatter and definition body for one term.
///
/// The field order and the omission rules are load-bearing for the site
/// tooling: `tags` is always present, `alternates` (quoted values) and
/// `links` (bare values) are left out entirely when empty.
pub fn render(page: &TermPage) -> RenderResult<String> {
    validate(page)?;

    let mut lines = vec![
        "---".to_owned(),
        format!("id: {}", page.id),
        format!("term: {}", page.term),
        format!("tags: [{}]", page.tags.join(", ")),
    ];

    if !page.alternates.is_empty() {
        let quoted = page
            .alternates
            .iter()
            .map(|alternate| format!("\"{alternate}\""))
            .collect::<Vec<_>>();
        lines.push(format!("alternates: [{}]", quoted.join(", ")));
    }

    if !page.links.is_empty() {
        lines.push(format!("links: [{}]", page.links.join(", ")));
    }

    lines.push("---".to_owned());
    lines.push(String::new());
    lines.push(page.definition.to_owned());
    lines.push(String::new());

    Ok(lines.join("\n"))
}

fn validate(page: &TermPage) -> RenderResult<()> {
    if page.term.trim().is_empty() {
        return Err(RenderError::EmptyName);
    }
    if page.id.trim().is_empty() {
        return Err(RenderError::EmptyId(page.term.to_owned()));
    }
    if page.tags.iter().all(|tag| tag.trim().is_empty()) {
        return Err(RenderError::NoTags(page.term.to_owned()));
    }
    if page.definition.trim().is_empty() {
        return Err(RenderError::EmptyDefinition(page.term.to_owned()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page<'a>(
        tags: &'a [String],
        alternates: &'a [String],
        links: &'a [String],
    ) -> TermPage<'a> {
        TermPage {
            id: "cc-buffer",
            term: "CC Buffer",
            tags,
            alternates,
            links,
            definition: "A buffer is...",
        }
    }

    #[test]
    fn renders_all_fields_in_fixed_order() {
        let tags = vec!["game-mechanics".to_owned()];
        let alternates = vec!["CC cap".to_owned(), "crowd control buffer".to_owned()];
        let links = vec!["tenacity".to_owned()];

        let output = render(&page(&tags, &alternates, &links)).unwrap();

        assert_eq!(
            output,
            "---\n\
             id: cc-buffer\n\
             term: CC Buffer\n\
             tags: [game-mechanics]\n\
             alternates: [\"CC cap\", \"crowd control buffer\"]\n\
             links: [tenacity]\n\
             ---\n\
             \n\
             A buffer is...\n"
        );
    }

    #[test]
    fn empty_optionals_are_omitted_but_tags_stay() {
        let tags = vec!["game-mechanics".to_owned()];

        let output = render(&page(&tags, &[], &[])).unwrap();

        assert!(output.contains("tags: [game-mechanics]"));
        assert!(!output.contains("alternates:"));
        assert!(!output.contains("links:"));
    }

    #[test]
    fn alternates_are_quoted_and_links_are_not() {
        let tags = vec!["macro".to_owned()];
        let alternates = vec!["alt one".to_owned()];
        let links = vec!["ward".to_owned()];

        let output = render(&page(&tags, &alternates, &links)).unwrap();

        assert!(output.contains("alternates: [\"alt one\"]"));
        assert!(output.contains("links: [ward]"));
    }

    #[test]
    fn output_ends_with_a_single_trailing_newline() {
        let tags = vec!["macro".to_owned()];

        let output = render(&page(&tags, &[], &[])).unwrap();

        assert!(output.ends_with("A buffer is...\n"));
        assert!(!output.ends_with("\n\n"));
    }

    #[test]
    fn frontmatter_id_round_trips() {
        let tags = vec!["macro".to_owned()];
        let output = render(&page(&tags, &[], &[])).unwrap();

        let id_line = output
            .lines()
            .find(|line| line.starts_with("id: "))
            .unwrap();

        assert_eq!(id_line.strip_prefix("id: ").unwrap(), "cc-buffer");
    }

    #[test]
    fn empty_id_is_rejected() {
        let tags = vec!["macro".to_owned()];
        let mut invalid = page(&tags, &[], &[]);
        invalid.id = "";

        assert_eq!(
            render(&invalid),
            Err(RenderError::EmptyId("CC Buffer".to_owned()))
        );
    }

    #[test]
    fn empty_name_is_rejected() {
        let tags = vec!["macro".to_owned()];
        let mut invalid = page(&tags, &[], &[]);
        invalid.term = " ";

        assert_eq!(render(&invalid), Err(RenderError::EmptyName));
    }

    #[test]
    fn missing_tags_are_rejected() {
        let no_tags: Vec<String> = Vec::new();

        assert_eq!(
            render(&page(&no_tags, &[], &[])),
            Err(RenderError::NoTags("CC Buffer".to_owned()))
        );

        let blank_tags = vec![String::new()];
        assert_eq!(
            render(&page(&blank_tags, &[], &[])),
            Err(RenderError::NoTags("CC Buffer".to_owned()))
        );
    }

    #[test]
    fn empty_definition_is_rejected() {
        let tags = vec!["macro".to_owned()];
        let mut invalid = page(&tags, &[], &[]);
        invalid.definition = "\n  \n";

        assert_eq!(
            render(&invalid),
            Err(RenderError::EmptyDefinition("CC Buffer".to_owned()))
        );
    }
}
