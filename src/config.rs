// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;

/// Google Doc id of the glossary, taken from the document URL:
/// https://docs.google.com/document/d/THIS_IS_THE_DOC_ID/edit
pub const DEFAULT_DOC_ID: &str = "1BhACXoMJUJd41HbKex5Zv7jEBZ2xyooNeUzPbOqbjV8";

/// Tab of the document that holds the written definitions.
pub const DEFAULT_TAB_NAME: &str = "Written Definitions";

/// Where the per-term markdown files land, relative to the site root.
pub const DEFAULT_OUTPUT_DIR: &str = "src/data/terms";

/// OAuth token file with the access/refresh credentials.
pub const DEFAULT_TOKEN_FILE: &str = "token.json";

/// Run configuration, assembled from the CLI flags. Passing it around keeps
/// the parser and renderer free of process-wide state.
#[derive(Debug, Clone)]
pub struct Config {
    pub doc_id: String,
    pub tab_name: String,
    pub output_dir: PathBuf,
    pub token_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            doc_id: DEFAULT_DOC_ID.to_owned(),
            tab_name: DEFAULT_TAB_NAME.to_owned(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            token_file: PathBuf::from(DEFAULT_TOKEN_FILE),
        }
    }
}
