//! Login command implementation

use crate::auth::{self, AuthClient};
use crate::cli::args::LoginArgs;
use crate::cli::logging::LogLevel;
use crate::config::ClientConfig;
use dialoguer::{Input, Password};

pub fn run_login(args: LoginArgs, level: LogLevel) -> Result<(), String> {
    let username = match args.username {
        Some(username) => username,
        None => Input::<String>::new()
            .with_prompt("Username")
            .interact_text()
            .map_err(|e| format!("Username prompt: {e}"))?,
    };
    let password = Password::new()
        .with_prompt("Password")
        .interact()
        .map_err(|e| format!("Password prompt: {e}"))?;

    let config = ClientConfig::new(args.env);
    let client = AuthClient::new(config).map_err(|e| format!("Client initialization: {e}"))?;
    let session =
        client.login(&username, &password).map_err(|e| format!("Login failed: {e}"))?;

    let path = auth::store_token(&session.token).map_err(|e| format!("Token storage: {e}"))?;

    level.info(&format!("Logged in as {username}"));
    level.debug(&format!("Token stored at {}", path.display()));
    Ok(())
}
