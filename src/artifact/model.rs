//! Model artifact sources

use super::error::{ExportError, Result};
use std::path::{Path, PathBuf};

/// A trained model that can be serialized into an uploadable artifact.
///
/// Implementations bridge whatever in-process representation a model has
/// (framework bindings, an in-memory buffer, a file written by another
/// tool) to the bytes shipped to the service.
pub trait ModelSource {
    /// Serialized model bytes in the deployment filetype.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::UnsupportedArtifact`] when the source cannot
    /// produce serialized weights.
    fn to_bytes(&self) -> Result<Vec<u8>>;
}

/// Model weights already serialized in memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModelBytes {
    bytes: Vec<u8>,
}

impl ModelBytes {
    /// Wrap an in-memory serialized model.
    #[must_use]
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self { bytes: bytes.into() }
    }

    /// Size of the serialized model in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the buffer holds no weights.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl ModelSource for ModelBytes {
    fn to_bytes(&self) -> Result<Vec<u8>> {
        if self.bytes.is_empty() {
            return Err(ExportError::UnsupportedArtifact {
                reason: "model has no serialized weights".to_string(),
            });
        }
        Ok(self.bytes.clone())
    }
}

/// Model artifact already serialized to a file on disk.
///
/// The file is read at export time, so it must stay in place until the
/// deployment call completes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModelFile {
    path: PathBuf,
}

impl ModelFile {
    /// Reference a serialized model file.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the serialized model.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ModelSource for ModelFile {
    fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(std::fs::read(&self.path)?)
    }
}
