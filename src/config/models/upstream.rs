//! Upstream pricing API configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Upstream pricing API configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Endpoint returning the latest metal prices
    #[serde(default = "default_upstream_base_url")]
    pub base_url: String,
    /// API key; when unset the variables in `api_key_env` are consulted
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,
    /// Environment variables holding the API key, first non-empty wins
    #[serde(default = "default_api_key_env")]
    pub api_key_env: Vec<String>,
    /// Request timeout in seconds, unset means wait for the upstream indefinitely
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: default_upstream_base_url(),
            api_key: None,
            api_key_env: default_api_key_env(),
            timeout_secs: None,
        }
    }
}

impl fmt::Debug for UpstreamConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpstreamConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("api_key_env", &self.api_key_env)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl UpstreamConfig {
    /// Resolve the API key from the config file or the environment
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .filter(|key| !key.is_empty())
            .or_else(|| {
                self.api_key_env
                    .iter()
                    .filter_map(|name| std::env::var(name).ok())
                    .find(|value| !value.is_empty())
            })
    }

    /// Request timeout, if one is configured
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Validate upstream configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("Upstream base URL cannot be empty".to_string());
        }

        url::Url::parse(&self.base_url)
            .map_err(|e| format!("Invalid upstream base URL '{}': {}", self.base_url, e))?;

        if self.timeout_secs == Some(0) {
            return Err("Upstream timeout cannot be 0".to_string());
        }

        Ok(())
    }
}
