//! Deployment workflow
//!
//! Negotiates short-lived upload grants with the control plane, transfers
//! artifacts against them, and reports per-artifact outcomes. Grants are
//! single use and never reused across artifacts; the orchestrator removes
//! its local artifact files on every exit path.
//!
//! # Example
//!
//! ```no_run
//! use neurodeploy::artifact::ModelFile;
//! use neurodeploy::config::{ClientConfig, Environment};
//! use neurodeploy::deploy::{DeployOptions, Deployer};
//!
//! # fn main() -> Result<(), neurodeploy::deploy::DeployError> {
//! let deployer = Deployer::new(ClientConfig::new(Environment::Dev))?;
//! let model = ModelFile::new("iris.h5");
//! let report = deployer.deploy("iris-classifier", &model, "token", &DeployOptions::default())?;
//! for outcome in report.outcomes() {
//!     println!("{outcome}");
//! }
//! # Ok(())
//! # }
//! ```

mod deployer;
mod error;
mod grant;
mod grant_client;
mod outcome;
mod target;
mod uploader;


pub use deployer::Deployer;
pub use error::{DeployError, Result};
pub use grant::{GrantBundle, UploadGrant};
pub use grant_client::{GrantClient, GrantIssuer};
pub use outcome::{ArtifactKind, DeployReport, UploadOutcome, UPLOAD_ACCEPTED};
pub use target::{DeployOptions, DeploymentTarget, DEFAULT_FILETYPE, DEFAULT_LIB};
pub use uploader::{ArtifactUploader, PresignedUploader};
