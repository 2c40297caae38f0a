// SPDX-License-Identifier: Apache-2.0

//! Serde view of a Google Docs document, reduced to the pieces the glossary
//! sync cares about: tabs, paragraphs, their named styles and text runs.

use crate::auth;
use crate::config::Config;
use crate::error::TermsyncError;
use crate::parser::{Paragraph, ParagraphStyle};

use serde::Deserialize;

const DOCS_API_BASE: &str = "https://docs.googleapis.com/v1/documents";

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GoogleDoc {
    pub title: String,
    tabs: Vec<Tab>,
    body: Option<DocBody>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct Tab {
    tab_properties: TabProperties,
    document_tab: Option<DocumentTab>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct TabProperties {
    title: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct DocumentTab {
    body: Option<DocBody>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct DocBody {
    content: Vec<StructuralElement>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct StructuralElement {
    paragraph: Option<DocParagraph>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct DocParagraph {
    paragraph_style: NamedStyle,
    elements: Vec<ParagraphElement>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct NamedStyle {
    named_style_type: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct ParagraphElement {
    text_run: Option<TextRun>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TextRun {
    content: String,
}

impl GoogleDoc {
    pub fn from_json(json: &str) -> Result<Self, TermsyncError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Extracts the styled paragraphs of the named tab, falling back to the
    /// main document body for documents without tabs.
    pub fn paragraphs(&self, tab_name: &str) -> Result<Vec<Paragraph>, TermsyncError> {
        let content = self.tab_content(tab_name)?;

        Ok(content
            .iter()
            .filter_map(|element| element.paragraph.as_ref())
            .map(to_paragraph)
            .collect())
    }

    fn tab_content(&self, tab_name: &str) -> Result<&[StructuralElement], TermsyncError> {
        if let Some(tab) = self
            .tabs
            .iter()
            .find(|tab| tab.tab_properties.title == tab_name)
        {
            log::debug!("found tab: {tab_name}");
            return Ok(tab
                .document_tab
                .as_ref()
                .and_then(|document_tab| document_tab.body.as_ref())
                .map(|body| body.content.as_slice())
                .unwrap_or(&[]));
        }

        if let Some(body) = &self.body {
            log::debug!("no tab named '{tab_name}', using the main document body");
            return Ok(&body.content);
        }

        Err(TermsyncError::TabNotFound {
            tab: tab_name.to_owned(),
            available: self
                .tabs
                .iter()
                .map(|tab| tab.tab_properties.title.clone())
                .collect(),
        })
    }
}

fn to_paragraph(paragraph: &DocParagraph) -> Paragraph {
    let style = match paragraph.paragraph_style.named_style_type.as_str() {
        "HEADING_1" => ParagraphStyle::SectionHeading,
        "HEADING_2" => ParagraphStyle::TermHeading,
        _ => ParagraphStyle::Body,
    };

    let text = paragraph
        .elements
        .iter()
        .filter_map(|element| element.text_run.as_ref())
        .map(|run| run.content.as_str())
        .collect::<String>();

    Paragraph::new(style, text.trim_end_matches('\n'))
}

/// Fetches the document, refreshing the access token once when Google
/// rejects the stored one. Any failure here is fatal for the run.
pub fn fetch(config: &Config) -> Result<GoogleDoc, TermsyncError> {
    let token = auth::load_token(&config.token_file)?;

    if !token.access_token.is_empty() {
        match fetch_with_token(&config.doc_id, &token.access_token) {
            Err(TermsyncError::AuthRejected(code)) if token.can_refresh() => {
                log::info!("access token rejected (HTTP {code}), trying a refresh");
            }
            result => return result,
        }
    }

    let refreshed = token.refresh()?;
    fetch_with_token(&config.doc_id, &refreshed)
}

fn fetch_with_token(doc_id: &str, access_token: &str) -> Result<GoogleDoc, TermsyncError> {
    let url = format!("{DOCS_API_BASE}/{doc_id}?includeTabsContent=true");

    let mut response = ureq::get(&url)
        .header("Authorization", &format!("Bearer {access_token}"))
        .call()
        .map_err(|err| match err {
            ureq::Error::StatusCode(code) if code == 401 || code == 403 => {
                TermsyncError::AuthRejected(code)
            }
            err => TermsyncError::FetchFailed {
                doc_id: doc_id.to_owned(),
                source: err,
            },
        })?;

    let body = response
        .body_mut()
        .read_to_string()
        .map_err(|err| TermsyncError::BodyRead(err.to_string()))?;

    GoogleDoc::from_json(&body)
}

#[cfg(test)]
mod tests {
    use super::*;

    use anyhow::{anyhow, Result};

    fn tabbed_doc() -> GoogleDoc {
        GoogleDoc::from_json(
            r#"{
                "title": "League Strategic Glossary",
                "tabs": [
                    {
                        "tabProperties": { "title": "Notes" },
                        "documentTab": { "body": { "content": [
                            { "paragraph": {
                                "paragraphStyle": { "namedStyleType": "NORMAL_TEXT" },
                                "elements": [ { "textRun": { "content": "scratch\n" } } ]
                            } }
                        ] } }
                    },
                    {
                        "tabProperties": { "title": "Written Definitions" },
                        "documentTab": { "body": { "content": [
                            { "sectionBreak": {} },
                            { "paragraph": {
                                "paragraphStyle": { "namedStyleType": "HEADING_1" },
                                "elements": [ { "textRun": { "content": "Game Mechanics\n" } } ]
                            } },
                            { "paragraph": {
                                "paragraphStyle": { "namedStyleType": "HEADING_2" },
                                "elements": [
                                    { "textRun": { "content": "CC " } },
                                    { "textRun": { "content": "Buffer ✓\n" } }
                                ]
                            } },
                            { "paragraph": {
                                "paragraphStyle": { "namedStyleType": "NORMAL_TEXT" },
                                "elements": [ { "textRun": { "content": "A buffer is...\n" } } ]
                            } }
                        ] } }
                    }
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn paragraphs_come_from_the_named_tab() {
        let doc = tabbed_doc();

        let paragraphs = doc.paragraphs("Written Definitions").unwrap();

        assert_eq!(
            paragraphs,
            vec![
                Paragraph::new(ParagraphStyle::SectionHeading, "Game Mechanics"),
                Paragraph::new(ParagraphStyle::TermHeading, "CC Buffer ✓"),
                Paragraph::new(ParagraphStyle::Body, "A buffer is..."),
            ]
        );
    }

    #[test]
    fn text_runs_are_concatenated_and_trailing_newline_stripped() {
        let doc = tabbed_doc();

        let paragraphs = doc.paragraphs("Written Definitions").unwrap();

        assert_eq!(paragraphs[1].text, "CC Buffer ✓");
    }

    #[test]
    fn falls_back_to_the_main_body_when_the_tab_is_missing() {
        let doc = GoogleDoc::from_json(
            r#"{
                "title": "Old style doc",
                "body": { "content": [
                    { "paragraph": {
                        "paragraphStyle": { "namedStyleType": "HEADING_2" },
                        "elements": [ { "textRun": { "content": "Ward ✓\n" } } ]
                    } }
                ] }
            }"#,
        )
        .unwrap();

        let paragraphs = doc.paragraphs("Written Definitions").unwrap();

        assert_eq!(
            paragraphs,
            vec![Paragraph::new(ParagraphStyle::TermHeading, "Ward ✓")]
        );
    }

    #[test]
    fn missing_tab_without_a_body_is_fatal() -> Result<()> {
        let doc = GoogleDoc::from_json(
            r#"{ "tabs": [ { "tabProperties": { "title": "Notes" } } ] }"#,
        )
        .unwrap();

        match doc.paragraphs("Written Definitions") {
            Err(TermsyncError::TabNotFound { tab, available }) => {
                assert_eq!(tab, "Written Definitions");
                assert_eq!(available, vec!["Notes".to_owned()]);
                Ok(())
            }
            _ => Err(anyhow!("a missing tab without a body fallback should fail!")),
        }
    }

    #[test]
    fn non_paragraph_elements_are_skipped() {
        let doc = tabbed_doc();

        // the section break in the sample content must not show up
        let paragraphs = doc.paragraphs("Written Definitions").unwrap();
        assert_eq!(paragraphs.len(), 3);
    }
}
