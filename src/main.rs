//! Neurodeploy CLI
//!
//! Command-line entry point for the neurodeploy client library.
//!
//! # Usage
//!
//! ```bash
//! # Log in and store an API token
//! neurodeploy login --username ada
//!
//! # Deploy a model
//! neurodeploy deploy iris-classifier --model iris.h5
//!
//! # Deploy with a preprocessing script
//! neurodeploy deploy iris-classifier --model iris.h5 --preprocessing preprocess.py
//!
//! # Deploy to production, publicly reachable
//! neurodeploy deploy iris-classifier --model iris.h5 --env prod --public
//! ```

use clap::Parser;
use neurodeploy::cli::{run_command, Cli};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
