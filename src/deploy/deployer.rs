//! Deployment orchestration

use super::error::{DeployError, Result};
use super::grant_client::{GrantClient, GrantIssuer};
use super::outcome::{ArtifactKind, DeployReport, UploadOutcome};
use super::target::DeployOptions;
use super::uploader::{ArtifactUploader, PresignedUploader};
use crate::artifact::{export_artifacts, ModelSource};
use crate::config::ClientConfig;

/// Orchestrates one deployment: export, grant negotiation, uploads,
/// cleanup.
///
/// Generic over the grant and upload backends so the workflow can be
/// exercised without a network.
pub struct Deployer<G = GrantClient, U = PresignedUploader> {
    grants: G,
    uploader: U,
}

impl Deployer {
    /// Create a deployer backed by the HTTP clients.
    ///
    /// # Errors
    ///
    /// Returns [`DeployError::Transport`] if either HTTP client cannot be
    /// constructed.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let uploader = PresignedUploader::new(&config)?;
        let grants = GrantClient::new(config)?;
        Ok(Self { grants, uploader })
    }
}

impl<G: GrantIssuer, U: ArtifactUploader> Deployer<G, U> {
    /// Create a deployer over explicit grant and upload backends.
    pub fn with_backends(grants: G, uploader: U) -> Self {
        Self { grants, uploader }
    }

    /// Deploy a model under `name`, uploading each artifact against a
    /// fresh single-use grant.
    ///
    /// Steps run strictly in order: export, grant request, model upload,
    /// preprocessing upload. A rejected upload aborts the remaining steps;
    /// an already-accepted model upload is not rolled back. Local artifact
    /// files are removed on every exit path.
    ///
    /// # Errors
    ///
    /// - [`DeployError::Export`] if an artifact cannot be materialized;
    ///   no network call is made in that case
    /// - [`DeployError::GrantRequest`] / [`DeployError::MalformedGrant`]
    ///   if grant negotiation fails; no upload is attempted
    /// - [`DeployError::UploadRejected`] if the backend refuses an upload
    /// - [`DeployError::PreprocessingGrantMissing`] if a preprocessing
    ///   script was supplied but the bundle carries no grant for it
    pub fn deploy(
        &self,
        name: &str,
        model: &dyn ModelSource,
        token: &str,
        options: &DeployOptions,
    ) -> Result<DeployReport> {
        let target = options.target_for(name);

        // Removed when this handle drops, whichever way the call exits.
        let artifacts =
            export_artifacts(model, &options.filetype, options.preprocessing.as_ref())?;

        let bundle = self.grants.request_grant(&target, token)?;

        let model_outcome =
            self.upload_checked(&bundle.model, ArtifactKind::Model, artifacts.model_path())?;

        let preprocessing_outcome = match (&bundle.preprocessing, artifacts.preprocessing_path()) {
            (Some(grant), Some(path)) => {
                Some(self.upload_checked(grant, ArtifactKind::Preprocessing, path)?)
            }
            // The server acknowledged preprocessing intent but issued no
            // grant for it; the model is already live without it.
            (None, Some(_)) => return Err(DeployError::PreprocessingGrantMissing),
            // An unsolicited grant is left unconsumed.
            (Some(_), None) | (None, None) => None,
        };

        Ok(DeployReport { model: model_outcome, preprocessing: preprocessing_outcome })
    }

    fn upload_checked(
        &self,
        grant: &super::grant::UploadGrant,
        artifact: ArtifactKind,
        path: &std::path::Path,
    ) -> Result<UploadOutcome> {
        let outcome = self.uploader.upload(grant, artifact, path)?;
        if !outcome.succeeded() {
            return Err(DeployError::UploadRejected { outcome });
        }
        Ok(outcome)
    }
}
