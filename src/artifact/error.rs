//! Artifact export error types

use thiserror::Error;

/// Result type for artifact export operations
pub type Result<T> = std::result::Result<T, ExportError>;

/// Errors producing local artifact files
#[derive(Debug, Error)]
pub enum ExportError {
    /// Serialization capability for the model is unavailable
    #[error("Unsupported artifact: {reason}")]
    UnsupportedArtifact { reason: String },

    /// Preprocessing entry point does not carry the canonical name
    #[error("The preprocessing function must be named '{expected}', found '{found}'")]
    NamingConvention { expected: &'static str, found: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
