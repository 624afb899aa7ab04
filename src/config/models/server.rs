//! Server configuration

use super::*;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host
    #[serde(default = "default_host")]
    pub host: String,
    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
    /// Number of worker threads
    pub workers: Option<usize>,
    /// CORS configuration
    #[serde(default)]
    pub cors: CorsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
            cors: CorsConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Get the server address
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the number of workers (defaults to CPU count)
    pub fn worker_count(&self) -> usize {
        self.workers.unwrap_or_else(num_cpus::get)
    }

    /// Validate server configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.port == 0 {
            return Err("Port cannot be 0".to_string());
        }

        if self.host.is_empty() {
            return Err("Host cannot be empty".to_string());
        }

        if self.workers == Some(0) {
            return Err("Worker count cannot be 0".to_string());
        }

        Ok(())
    }
}

/// CORS configuration
///
/// Empty lists mean "allow any". The defaults open the API to every origin,
/// method and header, with credentials, so a browser frontend on any host can
/// call it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Enable CORS
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Allowed origins (empty or "*" means allow all)
    #[serde(default)]
    pub allowed_origins: Vec<String>,
    /// Allowed methods (empty or "*" means allow all)
    #[serde(default)]
    pub allowed_methods: Vec<String>,
    /// Allowed headers (empty or "*" means allow all)
    #[serde(default)]
    pub allowed_headers: Vec<String>,
    /// Max age for preflight requests
    #[serde(default = "default_cors_max_age")]
    pub max_age: u32,
    /// Allow credentials
    #[serde(default = "default_true")]
    pub allow_credentials: bool,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            allowed_origins: vec![],
            allowed_methods: vec![],
            allowed_headers: vec![],
            max_age: default_cors_max_age(),
            allow_credentials: true,
        }
    }
}

impl CorsConfig {
    /// Check if CORS allows all origins
    pub fn allows_all_origins(&self) -> bool {
        allows_all(&self.allowed_origins)
    }

    /// Check if CORS allows all methods
    pub fn allows_all_methods(&self) -> bool {
        allows_all(&self.allowed_methods)
    }

    /// Check if CORS allows all headers
    pub fn allows_all_headers(&self) -> bool {
        allows_all(&self.allowed_headers)
    }

    /// Validate CORS configuration
    pub fn validate(&self) -> Result<(), String> {
        if !self.enabled {
            return Ok(());
        }

        for method in self.allowed_methods.iter().filter(|m| m.as_str() != "*") {
            if method.parse::<actix_web::http::Method>().is_err() {
                return Err(format!("Invalid CORS method: {}", method));
            }
        }

        if self.allows_all_origins() && self.allow_credentials {
            // The origin is echoed back rather than sent as a literal "*".
            warn!("CORS allows all origins with credentials; the request origin will be echoed");
        }

        Ok(())
    }
}

fn allows_all(list: &[String]) -> bool {
    list.is_empty() || list.iter().any(|v| v == "*")
}

fn default_cors_max_age() -> u32 {
    3600
}
