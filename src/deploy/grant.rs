//! Upload grant wire types

use super::error::{DeployError, Result};
use serde::Deserialize;
use std::collections::BTreeMap;

/// Single-use presigned upload credential for one artifact.
///
/// Issued by the control plane, consumed at most once, never persisted.
/// Expiry is embedded server-side; the client does not inspect or refresh
/// it.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct UploadGrant {
    /// Storage backend URL to post the artifact to
    pub url: String,
    /// Form fields the backend requires alongside the file
    #[serde(default)]
    pub fields: BTreeMap<String, String>,
}

/// Grants returned for one deployment request.
///
/// The model grant is always present; the preprocessing grant only when
/// the server determined preprocessing was requested and permitted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GrantBundle {
    /// Grant for the model artifact
    pub model: UploadGrant,
    /// Grant for the preprocessing artifact, when issued
    pub preprocessing: Option<UploadGrant>,
}

#[derive(Debug, Deserialize)]
struct GrantBundleWire {
    model: Option<UploadGrant>,
    preprocessing: Option<UploadGrant>,
}

impl GrantBundle {
    /// Parse a control-plane response body.
    ///
    /// # Errors
    ///
    /// Returns [`DeployError::MalformedGrant`] if the body is not valid
    /// JSON of the expected shape or the model grant is absent.
    pub fn from_json(body: &str) -> Result<Self> {
        let wire: GrantBundleWire = serde_json::from_str(body)
            .map_err(|e| DeployError::MalformedGrant(e.to_string()))?;
        let model = wire
            .model
            .ok_or_else(|| DeployError::MalformedGrant("missing 'model' grant".to_string()))?;
        Ok(Self { model, preprocessing: wire.preprocessing })
    }
}
