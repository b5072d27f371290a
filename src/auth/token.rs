//! Token resolution and storage

use std::fs;
use std::io;
use std::path::PathBuf;

/// Environment variable consulted first for the API token.
pub const TOKEN_ENV: &str = "NEURODEPLOY_TOKEN";

/// Resolve a token from the environment or the stored token file.
///
/// Priority:
/// 1. `NEURODEPLOY_TOKEN` environment variable
/// 2. `~/.neurodeploy/token` file
#[must_use]
pub fn resolve_token() -> Option<String> {
    if let Ok(token) = std::env::var(TOKEN_ENV) {
        if !token.is_empty() {
            return Some(token);
        }
    }

    if let Some(path) = token_file() {
        if let Ok(token) = fs::read_to_string(path) {
            let token = token.trim().to_string();
            if !token.is_empty() {
                return Some(token);
            }
        }
    }

    None
}

/// Persist a token for later resolution; returns the file written.
///
/// # Errors
///
/// Fails when no home directory is available or the file cannot be
/// written.
pub fn store_token(token: &str) -> io::Result<PathBuf> {
    let path = token_file()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no home directory"))?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, token)?;
    Ok(path)
}

fn token_file() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".neurodeploy").join("token"))
}
