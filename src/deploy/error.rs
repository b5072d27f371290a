//! Deployment error types

use super::outcome::UploadOutcome;
use crate::artifact::ExportError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for deployment operations
pub type Result<T> = std::result::Result<T, DeployError>;

/// Errors raised while negotiating grants or transferring artifacts
#[derive(Debug, Error)]
pub enum DeployError {
    /// Local artifact export failed
    #[error(transparent)]
    Export(#[from] ExportError),

    /// Control plane rejected the grant request
    #[error("Grant request failed with HTTP {status}: {body}")]
    GrantRequest { status: u16, body: String },

    /// Grant response body did not match the expected shape
    #[error("Malformed grant response: {0}")]
    MalformedGrant(String),

    /// Preprocessing was supplied but the bundle carries no grant for it
    #[error("No presigned url to upload preprocessing function with")]
    PreprocessingGrantMissing,

    /// Storage backend refused an artifact upload
    #[error("{} upload rejected with HTTP {}", .outcome.artifact, .outcome.status)]
    UploadRejected { outcome: UploadOutcome },

    /// Local artifact could not be read at upload time
    #[error("Failed to read artifact {path}: {source}")]
    FileRead { path: PathBuf, source: std::io::Error },

    /// Network failure or timeout
    #[error("Transport error: {0}")]
    Transport(String),
}
