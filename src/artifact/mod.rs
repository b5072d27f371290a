//! Local artifact export
//!
//! Materializes deployment artifacts (serialized model weights and an
//! optional preprocessing script) as files in a per-call temporary
//! directory that is removed when the export handle drops.

mod error;
mod exporter;
mod model;
mod preprocessing;


pub use error::{ExportError, Result};
pub use exporter::{export_artifacts, ExportedArtifacts};
pub use model::{ModelBytes, ModelFile, ModelSource};
pub use preprocessing::{PreprocessingScript, CANONICAL_ENTRY_POINT};
