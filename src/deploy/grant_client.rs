//! Control-plane grant negotiation

use super::error::{DeployError, Result};
use super::grant::GrantBundle;
use super::target::DeploymentTarget;
use crate::config::ClientConfig;

/// Issues upload grants for a deployment target.
pub trait GrantIssuer {
    /// Request a fresh grant bundle for `target`.
    ///
    /// Each call yields new single-use grants; repeating the call is safe
    /// and never invalidates grants issued earlier.
    fn request_grant(&self, target: &DeploymentTarget, token: &str) -> Result<GrantBundle>;
}

/// HTTP client for the control-plane grant endpoint.
///
/// Sends exactly one request per call and never retries; retry policy
/// belongs to the caller.
pub struct GrantClient {
    config: ClientConfig,
    client: reqwest::blocking::Client,
}

impl GrantClient {
    /// Create a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`DeployError::Transport`] if the HTTP client cannot be
    /// constructed.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(config.user_agent().to_string())
            .timeout(config.timeout())
            .build()
            .map_err(|e| DeployError::Transport(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { config, client })
    }

    fn endpoint(&self, name: &str) -> String {
        format!("{}/ml-models/{name}", self.config.user_api_base())
    }
}

impl GrantIssuer for GrantClient {
    /// PUT `/ml-models/{name}` with the target metadata as query
    /// parameters and the bearer token as authorization.
    fn request_grant(&self, target: &DeploymentTarget, token: &str) -> Result<GrantBundle> {
        let response = self
            .client
            .put(self.endpoint(&target.name))
            .query(&[("lib", target.lib.as_str()), ("filetype", target.filetype.as_str())])
            .query(&[
                ("has_preprocessing", target.has_preprocessing),
                ("is_public", target.is_public),
            ])
            .bearer_auth(token)
            .send()
            .map_err(|e| DeployError::Transport(format!("Grant request failed: {e}")))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| DeployError::Transport(format!("Failed to read grant response: {e}")))?;

        if !status.is_success() {
            return Err(DeployError::GrantRequest { status: status.as_u16(), body });
        }

        GrantBundle::from_json(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Environment;

    #[test]
    fn test_endpoint_scoped_by_deployment_name() {
        let client = GrantClient::new(ClientConfig::new(Environment::Dev)).unwrap();
        assert_eq!(
            client.endpoint("iris-classifier"),
            "https://user-api.playingwithml.com/ml-models/iris-classifier"
        );
    }

    #[test]
    fn test_endpoint_follows_environment() {
        let client = GrantClient::new(ClientConfig::new(Environment::Prod)).unwrap();
        assert_eq!(
            client.endpoint("iris-classifier"),
            "https://user-api.neurodeploy.com/ml-models/iris-classifier"
        );
    }
}
