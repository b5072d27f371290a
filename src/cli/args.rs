//! CLI argument parsing

use crate::config::Environment;
use crate::deploy::{DEFAULT_FILETYPE, DEFAULT_LIB};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Neurodeploy: deploy ML models from the command line
#[derive(Parser, Debug, Clone)]
#[command(name = "neurodeploy")]
#[command(version)]
#[command(about = "Package and upload ML models to the neurodeploy service")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Log in and store an API token
    Login(LoginArgs),

    /// Deploy a model, with optional preprocessing
    Deploy(DeployArgs),
}

/// Arguments for the login command
#[derive(Parser, Debug, Clone)]
pub struct LoginArgs {
    /// Account username (prompted when omitted)
    #[arg(short, long)]
    pub username: Option<String>,

    /// Target environment
    #[arg(long, value_enum, default_value_t = Environment::Dev)]
    pub env: Environment,
}

/// Arguments for the deploy command
#[derive(Parser, Debug, Clone)]
pub struct DeployArgs {
    /// Deployment name, unique within the account
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Path to the serialized model file
    #[arg(short, long)]
    pub model: PathBuf,

    /// Path to a preprocessing script whose entry point is named `preprocess`
    #[arg(short, long)]
    pub preprocessing: Option<PathBuf>,

    /// Serialization library tag
    #[arg(long, default_value = DEFAULT_LIB)]
    pub lib: String,

    /// Artifact filetype tag
    #[arg(long, default_value = DEFAULT_FILETYPE)]
    pub filetype: String,

    /// Make the deployed model publicly reachable
    #[arg(long)]
    pub public: bool,

    /// API token (resolved from the environment or token file when omitted)
    #[arg(long)]
    pub token: Option<String>,

    /// Target environment
    #[arg(long, value_enum, default_value_t = Environment::Dev)]
    pub env: Environment,
}
