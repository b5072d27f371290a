//! Per-artifact upload outcomes

use std::fmt;

/// Status the storage backend returns for an accepted presigned upload.
pub const UPLOAD_ACCEPTED: u16 = 204;

/// Which artifact a transfer carried.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArtifactKind {
    /// Serialized model weights
    Model,
    /// Preprocessing script
    Preprocessing,
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Model => write!(f, "model"),
            Self::Preprocessing => write!(f, "preprocessing"),
        }
    }
}

/// Result of one presigned upload attempt.
#[derive(Clone, Debug)]
pub struct UploadOutcome {
    /// Artifact the transfer carried
    pub artifact: ArtifactKind,
    /// HTTP status returned by the storage backend
    pub status: u16,
    /// Raw response body, kept for diagnostics only
    pub body: String,
}

impl UploadOutcome {
    /// Whether the backend accepted the upload.
    ///
    /// The backend acknowledges presigned uploads with 204 No Content and
    /// nothing else; any other status, other 2xx codes included, is a
    /// failure.
    #[must_use]
    pub fn succeeded(&self) -> bool {
        self.status == UPLOAD_ACCEPTED
    }
}

impl fmt::Display for UploadOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Upload {}: {}",
            self.artifact,
            if self.succeeded() { "success" } else { "failure" }
        )
    }
}

/// Outcomes for one complete deployment.
#[derive(Clone, Debug)]
pub struct DeployReport {
    /// Outcome of the model upload
    pub model: UploadOutcome,
    /// Outcome of the preprocessing upload, when one was attempted
    pub preprocessing: Option<UploadOutcome>,
}

impl DeployReport {
    /// Iterate the outcomes in upload order.
    pub fn outcomes(&self) -> impl Iterator<Item = &UploadOutcome> {
        std::iter::once(&self.model).chain(self.preprocessing.iter())
    }
}
