//! Deploy command implementation

use crate::artifact::{ModelFile, PreprocessingScript};
use crate::auth;
use crate::cli::args::DeployArgs;
use crate::cli::logging::LogLevel;
use crate::config::ClientConfig;
use crate::deploy::{DeployError, DeployOptions, Deployer};

pub fn run_deploy(args: DeployArgs, level: LogLevel) -> Result<(), String> {
    if !args.model.exists() {
        return Err(format!("Model file not found: {}", args.model.display()));
    }

    let token = args
        .token
        .or_else(auth::resolve_token)
        .ok_or_else(|| format!("No API token: run `neurodeploy login` or set {}", auth::TOKEN_ENV))?;

    let preprocessing = match &args.preprocessing {
        Some(path) => {
            let source = std::fs::read_to_string(path)
                .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
            Some(PreprocessingScript::parse(source).map_err(|e| format!("Preprocessing: {e}"))?)
        }
        None => None,
    };

    let mut options = DeployOptions::default()
        .with_lib(args.lib.clone())
        .with_filetype(args.filetype.clone());
    if args.public {
        options = options.public();
    }
    if let Some(script) = preprocessing {
        options = options.with_preprocessing(script);
    }

    let config = ClientConfig::new(args.env);
    let deployer = Deployer::new(config).map_err(|e| format!("Client initialization: {e}"))?;
    let model = ModelFile::new(&args.model);

    level.info(&format!("Deploying {} ({})", args.name, args.env));
    level.debug(&format!("Model file: {}", args.model.display()));

    match deployer.deploy(&args.name, &model, &token, &options) {
        Ok(report) => {
            for outcome in report.outcomes() {
                level.info(&outcome.to_string());
            }
            Ok(())
        }
        Err(DeployError::UploadRejected { outcome }) => {
            level.info(&outcome.to_string());
            Err(format!("Upload rejected with HTTP {}", outcome.status))
        }
        Err(e) => Err(format!("Deploy failed: {e}")),
    }
}
