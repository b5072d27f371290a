//! Artifact export with scoped cleanup

use super::error::Result;
use super::model::ModelSource;
use super::preprocessing::PreprocessingScript;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Filename of the preprocessing artifact inside the export directory.
const PREPROCESSING_FILENAME: &str = "preprocessing.py";

/// Write deployment artifacts to a fresh temporary directory.
///
/// The model is serialized first; a failure there creates no files at all.
/// A preprocessing write failure leaves the already-written model file to
/// the directory's drop cleanup. Each call gets its own directory, so
/// concurrent deployments never collide on artifact paths.
///
/// # Errors
///
/// Propagates serialization failures from `model` and IO failures writing
/// either file.
pub fn export_artifacts(
    model: &dyn ModelSource,
    filetype: &str,
    preprocessing: Option<&PreprocessingScript>,
) -> Result<ExportedArtifacts> {
    let bytes = model.to_bytes()?;

    let dir = TempDir::new()?;
    let model_path = dir.path().join(format!("model.{filetype}"));
    fs::write(&model_path, bytes)?;

    let preprocessing_path = match preprocessing {
        Some(script) => {
            let path = dir.path().join(PREPROCESSING_FILENAME);
            fs::write(&path, script.source())?;
            Some(path)
        }
        None => None,
    };

    Ok(ExportedArtifacts { dir, model_path, preprocessing_path })
}

/// Locally exported artifact files.
///
/// The backing directory belongs to one deployment call and is removed
/// when this handle drops, on success and on every failure path alike.
#[derive(Debug)]
pub struct ExportedArtifacts {
    dir: TempDir,
    model_path: PathBuf,
    preprocessing_path: Option<PathBuf>,
}

impl ExportedArtifacts {
    /// Path of the serialized model file.
    #[must_use]
    pub fn model_path(&self) -> &Path {
        &self.model_path
    }

    /// Path of the preprocessing script, when one was exported.
    #[must_use]
    pub fn preprocessing_path(&self) -> Option<&Path> {
        self.preprocessing_path.as_deref()
    }

    /// Directory holding the artifacts (removed on drop).
    #[must_use]
    pub fn dir(&self) -> &Path {
        self.dir.path()
    }
}
