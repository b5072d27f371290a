//! Client configuration and environment selection.
//!
//! Every API client holds an explicit [`ClientConfig`]; there is no
//! process-wide environment state.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default request timeout applied to every HTTP client.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Service environment the client talks to.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Development environment
    #[default]
    Dev,
    /// Production environment
    Prod,
}

impl Environment {
    /// Domain identifier for this environment.
    #[must_use]
    pub fn domain(&self) -> &'static str {
        match self {
            Self::Dev => "playingwithml",
            Self::Prod => "neurodeploy",
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dev => write!(f, "dev"),
            Self::Prod => write!(f, "prod"),
        }
    }
}

/// Configuration shared by every API client.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    environment: Environment,
    timeout: Duration,
    user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(Environment::default())
    }
}

impl ClientConfig {
    /// Create a configuration for the given environment.
    #[must_use]
    pub fn new(environment: Environment) -> Self {
        Self {
            environment,
            timeout: DEFAULT_TIMEOUT,
            user_agent: "neurodeploy/0.1".to_string(),
        }
    }

    /// Set the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent sent with every request.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Environment this configuration points at.
    #[must_use]
    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// Request timeout applied to every call.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// User agent sent with every request.
    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Base URL of the user API for this environment.
    #[must_use]
    pub fn user_api_base(&self) -> String {
        format!("https://user-api.{}.com", self.environment.domain())
    }
}
