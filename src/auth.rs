// SPDX-License-Identifier: Apache-2.0

use crate::error::TermsyncError;

use serde::Deserialize;

use std::fs;
use std::path::Path;

const TOKEN_ENDPOINT: &str = "https://oauth2.googleapis.com/token";

/// Contents of the token file. The access token alone is enough for a run;
/// with the refresh fields present an expired token is exchanged for a fresh
/// one. Provisioning the file in the first place is an external setup step.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct StoredToken {
    pub access_token: String,
    pub refresh_token: String,
    pub client_id: String,
    pub client_secret: String,
}

impl StoredToken {
    pub fn can_refresh(&self) -> bool {
        !self.refresh_token.is_empty() && !self.client_id.is_empty() && !self.client_secret.is_empty()
    }

    /// Exchanges the refresh token for a new access token.
    pub fn refresh(&self) -> Result<String, TermsyncError> {
        #[derive(Deserialize)]
        struct RefreshResponse {
            access_token: String,
        }

        log::info!("refreshing access token");

        let mut response = ureq::post(TOKEN_ENDPOINT)
            .send_form([
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.as_str()),
                ("refresh_token", self.refresh_token.as_str()),
                ("grant_type", "refresh_token"),
            ])
            .map_err(|err| match err {
                ureq::Error::StatusCode(code) => TermsyncError::AuthRejected(code),
                err => TermsyncError::RefreshFailed(err),
            })?;

        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|err| TermsyncError::BodyRead(err.to_string()))?;
        let refreshed: RefreshResponse = serde_json::from_str(&body)?;

        Ok(refreshed.access_token)
    }
}

/// Loads the token file, failing with remediation guidance when it is
/// missing or unusable.
pub fn load_token(token_file: &Path) -> Result<StoredToken, TermsyncError> {
    if !token_file.exists() {
        return Err(TermsyncError::TokenFileMissing(token_file.to_path_buf()));
    }

    let raw = fs::read_to_string(token_file)?;
    let token: StoredToken = serde_json::from_str(&raw)?;

    if token.access_token.is_empty() && !token.can_refresh() {
        return Err(TermsyncError::TokenFileIncomplete(token_file.to_path_buf()));
    }

    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    use anyhow::{anyhow, Result};
    use tempfile::Builder;

    #[test]
    fn missing_token_file_is_a_config_error() -> Result<()> {
        let tmp_dir = Builder::new().prefix("termsync").tempdir()?;

        let token_file = tmp_dir.path().join("token.json");
        match load_token(&token_file) {
            Err(TermsyncError::TokenFileMissing(_)) => Ok(()),
            _ => Err(anyhow!("loading a missing token file should fail!")),
        }
    }

    #[test]
    fn token_with_access_token_loads() -> Result<()> {
        let tmp_dir = Builder::new().prefix("termsync").tempdir()?;

        let token_file = tmp_dir.path().join("token.json");
        fs::write(&token_file, r#"{"access_token": "ya29.something"}"#)?;

        let token = load_token(&token_file)?;
        assert_eq!(token.access_token, "ya29.something");
        assert!(!token.can_refresh());

        Ok(())
    }

    #[test]
    fn token_with_refresh_fields_but_no_access_token_loads() -> Result<()> {
        let tmp_dir = Builder::new().prefix("termsync").tempdir()?;

        let token_file = tmp_dir.path().join("token.json");
        fs::write(
            &token_file,
            r#"{"refresh_token": "r", "client_id": "c", "client_secret": "s"}"#,
        )?;

        let token = load_token(&token_file)?;
        assert!(token.access_token.is_empty());
        assert!(token.can_refresh());

        Ok(())
    }

    #[test]
    fn unusable_token_file_is_a_config_error() -> Result<()> {
        let tmp_dir = Builder::new().prefix("termsync").tempdir()?;

        let token_file = tmp_dir.path().join("token.json");
        fs::write(&token_file, "{}")?;

        match load_token(&token_file) {
            Err(TermsyncError::TokenFileIncomplete(_)) => Ok(()),
            _ => Err(anyhow!("loading an empty token file should fail!")),
        }
    }
}
