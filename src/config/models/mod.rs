//! Configuration data models
//!
//! This module defines all configuration structures used throughout the gateway.

pub mod cache;
pub mod gateway;
pub mod logging;
pub mod response;
pub mod server;
pub mod upstream;

// Re-export all configuration types
pub use cache::*;
pub use gateway::*;
pub use logging::*;
pub use response::*;
pub use server::*;
pub use upstream::*;

/// Default values for configuration
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    8000
}

/// Default upstream endpoint for latest spot prices
pub fn default_upstream_base_url() -> String {
    "https://api.metals.dev/v1/latest".to_string()
}

/// Environment variables consulted for the upstream credential, in order
pub fn default_api_key_env() -> Vec<String> {
    vec![
        "METALS_DEV_API_KEY".to_string(),
        "METALS_API_KEY".to_string(),
    ]
}

/// Default response cache TTL in seconds (12 hours)
pub fn default_cache_ttl() -> u64 {
    43_200
}

/// Default maximum number of cached upstream responses
pub fn default_cache_max_capacity() -> u64 {
    10_000
}

pub(crate) fn default_true() -> bool {
    true
}
