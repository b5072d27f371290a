//! Client SDK for the neurodeploy model-hosting service.
//!
//! Packages a trained model (plus an optional preprocessing script) and
//! uploads both to the service against short-lived, single-use presigned
//! upload grants negotiated with the control plane.
//!
//! # Example
//!
//! ```no_run
//! use neurodeploy::artifact::ModelFile;
//! use neurodeploy::config::{ClientConfig, Environment};
//! use neurodeploy::deploy::{DeployOptions, Deployer};
//!
//! # fn main() -> Result<(), neurodeploy::deploy::DeployError> {
//! let config = ClientConfig::new(Environment::Prod);
//! let deployer = Deployer::new(config)?;
//! let model = ModelFile::new("iris.h5");
//! let report = deployer.deploy("iris-classifier", &model, "token", &DeployOptions::default())?;
//! println!("{}", report.model);
//! # Ok(())
//! # }
//! ```

pub mod artifact;
pub mod auth;
pub mod cli;
pub mod config;
pub mod deploy;

pub use artifact::{ExportError, ModelBytes, ModelFile, ModelSource, PreprocessingScript};
pub use auth::{AuthClient, AuthError, Session};
pub use config::{ClientConfig, Environment};
pub use deploy::{
    DeployError, DeployOptions, DeployReport, Deployer, GrantBundle, UploadGrant, UploadOutcome,
};
