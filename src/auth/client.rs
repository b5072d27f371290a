//! Sessions endpoint client

use crate::config::ClientConfig;
use serde::Deserialize;
use std::collections::BTreeMap;
use thiserror::Error;

/// Result type for authentication operations
pub type Result<T> = std::result::Result<T, AuthError>;

/// Errors during session login
#[derive(Debug, Error)]
pub enum AuthError {
    /// Network failure or timeout
    #[error("Transport error: {0}")]
    Transport(String),

    /// Sessions endpoint rejected the credentials
    #[error("Login failed with HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// Session payload did not match the expected shape
    #[error("Malformed session response: {0}")]
    MalformedSession(String),
}

/// Session payload returned by the sessions endpoint.
///
/// Only the token is typed; the service treats the rest of the payload as
/// free-form and so does the client.
#[derive(Clone, Debug, Deserialize)]
pub struct Session {
    /// Bearer token consumed by the grant endpoint
    pub token: String,
    /// Remaining payload fields, passed through untyped
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// Client for the sessions endpoint.
pub struct AuthClient {
    config: ClientConfig,
    client: reqwest::blocking::Client,
}

impl AuthClient {
    /// Create a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Transport`] if the HTTP client cannot be
    /// constructed.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(config.user_agent().to_string())
            .timeout(config.timeout())
            .build()
            .map_err(|e| AuthError::Transport(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { config, client })
    }

    /// Log in with account credentials and obtain a session.
    ///
    /// Credentials travel as headers, matching the sessions endpoint
    /// contract.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Status`] for rejected credentials and
    /// [`AuthError::MalformedSession`] when the payload cannot be parsed.
    pub fn login(&self, username: &str, password: &str) -> Result<Session> {
        let url = format!("{}/sessions", self.config.user_api_base());
        let response = self
            .client
            .post(&url)
            .header("username", username)
            .header("password", password)
            .send()
            .map_err(|e| AuthError::Transport(format!("Login request failed: {e}")))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| AuthError::Transport(format!("Failed to read login response: {e}")))?;

        if !status.is_success() {
            return Err(AuthError::Status { status: status.as_u16(), body });
        }

        serde_json::from_str(&body).map_err(|e| AuthError::MalformedSession(e.to_string()))
    }
}
