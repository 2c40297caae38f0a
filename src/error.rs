use thiserror::Error;

use std::path::PathBuf;

/// Fatal errors that abort a run before or between phases. Per-record
/// failures are collected in the run report instead and never surface here.
#[derive(Error, Debug)]
pub enum TermsyncError {
    #[error("The output directory does not exist: '{0}'. Create it first, termsync never creates directories")]
    OutputDirMissing(PathBuf),
    #[error("The provided CSV file does either not exist or termsync has no read permission to '{0}'")]
    CsvFileDoesNotExist(PathBuf),
    #[error("The CSV file is missing required columns: {}", .0.join(", "))]
    CsvMissingColumns(Vec<String>),
    #[error("No token file found at '{0}'. Create OAuth credentials for the Google Docs API and store the token there")]
    TokenFileMissing(PathBuf),
    #[error("The token file '{0}' has neither an access token nor the client id/secret/refresh token needed to obtain one")]
    TokenFileIncomplete(PathBuf),
    #[error("Google rejected the credentials (HTTP {0}). Delete the token file and authenticate again")]
    AuthRejected(u16),
    #[error("Refreshing the access token failed: {0}")]
    RefreshFailed(ureq::Error),
    #[error("Fetching document '{doc_id}' failed: {source}")]
    FetchFailed { doc_id: String, source: ureq::Error },
    #[error("Reading the response body failed: {0}")]
    BodyRead(String),
    #[error("Tab '{tab}' not found in the document and the document has no main body. Available tabs: {}", .available.join(", "))]
    TabNotFound { tab: String, available: Vec<String> },
    #[error("Error accessing file")]
    IoError(#[from] std::io::Error),
    #[error("Malformed JSON")]
    JsonError(#[from] serde_json::Error),
    #[error("Error reading CSV")]
    CsvError(#[from] csv::Error),
}
