//! Deployment target metadata

use crate::artifact::PreprocessingScript;

/// Default serialization library tag.
pub const DEFAULT_LIB: &str = "tensorflow";

/// Default artifact filetype tag.
pub const DEFAULT_FILETYPE: &str = "h5";

/// Metadata describing one named deployment on the service.
///
/// The name is caller-supplied; uniqueness within the account is enforced
/// by the service, not here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeploymentTarget {
    /// Deployment name, unique within the caller's account
    pub name: String,
    /// Serialization library identifier
    pub lib: String,
    /// Artifact file extension tag
    pub filetype: String,
    /// Whether the deployed model is publicly reachable
    pub is_public: bool,
    /// Whether a preprocessing artifact accompanies the model
    pub has_preprocessing: bool,
}

/// Per-call deployment options.
#[derive(Clone, Debug)]
pub struct DeployOptions {
    /// Preprocessing script to ship alongside the model
    pub preprocessing: Option<PreprocessingScript>,
    /// Serialization library tag
    pub lib: String,
    /// Artifact filetype tag
    pub filetype: String,
    /// Whether the deployed model is publicly reachable
    pub is_public: bool,
}

impl Default for DeployOptions {
    fn default() -> Self {
        Self {
            preprocessing: None,
            lib: DEFAULT_LIB.to_string(),
            filetype: DEFAULT_FILETYPE.to_string(),
            is_public: false,
        }
    }
}

impl DeployOptions {
    /// Attach a preprocessing script.
    #[must_use]
    pub fn with_preprocessing(mut self, script: PreprocessingScript) -> Self {
        self.preprocessing = Some(script);
        self
    }

    /// Set the serialization library tag.
    #[must_use]
    pub fn with_lib(mut self, lib: impl Into<String>) -> Self {
        self.lib = lib.into();
        self
    }

    /// Set the artifact filetype tag.
    #[must_use]
    pub fn with_filetype(mut self, filetype: impl Into<String>) -> Self {
        self.filetype = filetype.into();
        self
    }

    /// Make the deployment publicly reachable.
    #[must_use]
    pub fn public(mut self) -> Self {
        self.is_public = true;
        self
    }

    /// Build the target metadata for a named deployment.
    ///
    /// `has_preprocessing` is derived from whether a script is present,
    /// never from any artifact path.
    #[must_use]
    pub fn target_for(&self, name: &str) -> DeploymentTarget {
        DeploymentTarget {
            name: name.to_string(),
            lib: self.lib.clone(),
            filetype: self.filetype.clone(),
            is_public: self.is_public,
            has_preprocessing: self.preprocessing.is_some(),
        }
    }
}
