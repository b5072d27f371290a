//! CLI command implementations

mod deploy;
mod login;

use super::args::{Cli, Command};
use super::logging::LogLevel;

/// Execute a CLI command based on the parsed arguments
pub fn run_command(cli: Cli) -> Result<(), String> {
    let level = LogLevel::from_flags(cli.verbose, cli.quiet);

    match cli.command {
        Command::Login(args) => login::run_login(args, level),
        Command::Deploy(args) => deploy::run_deploy(args, level),
    }
}
