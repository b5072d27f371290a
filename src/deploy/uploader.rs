//! Presigned artifact upload

use super::error::{DeployError, Result};
use super::grant::UploadGrant;
use super::outcome::{ArtifactKind, UploadOutcome};
use crate::config::ClientConfig;
use reqwest::blocking::multipart::Form;
use std::path::Path;

/// Transfers one local artifact against one upload grant.
pub trait ArtifactUploader {
    /// Submit the file at `path` to the grant's URL.
    ///
    /// Classification happens by status code only; the outcome carries
    /// the raw body for diagnostics.
    fn upload(
        &self,
        grant: &UploadGrant,
        artifact: ArtifactKind,
        path: &Path,
    ) -> Result<UploadOutcome>;
}

/// Multipart form uploader for presigned storage URLs.
///
/// One POST per grant, no retries, no body inspection beyond capture.
pub struct PresignedUploader {
    client: reqwest::blocking::Client,
}

impl PresignedUploader {
    /// Create an uploader from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`DeployError::Transport`] if the HTTP client cannot be
    /// constructed.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(config.user_agent().to_string())
            .timeout(config.timeout())
            .build()
            .map_err(|e| DeployError::Transport(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client })
    }
}

impl ArtifactUploader for PresignedUploader {
    fn upload(
        &self,
        grant: &UploadGrant,
        artifact: ArtifactKind,
        path: &Path,
    ) -> Result<UploadOutcome> {
        let mut form = Form::new();
        for (name, value) in &grant.fields {
            form = form.text(name.clone(), value.clone());
        }
        // The storage backend requires the file part after the grant fields.
        let form = form.file("file", path).map_err(|source| DeployError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

        let response = self
            .client
            .post(&grant.url)
            .multipart(form)
            .send()
            .map_err(|e| DeployError::Transport(format!("Upload request failed: {e}")))?;

        let status = response.status().as_u16();
        let body = response.text().unwrap_or_default();

        Ok(UploadOutcome { artifact, status, body })
    }
}
