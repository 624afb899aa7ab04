//! Cache configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Upstream response cache configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Enable caching
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Cache TTL in seconds
    #[serde(default = "default_cache_ttl")]
    pub ttl: u64,
    /// Maximum number of cached responses
    #[serde(default = "default_cache_max_capacity")]
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            ttl: default_cache_ttl(),
            max_capacity: default_cache_max_capacity(),
        }
    }
}

impl CacheConfig {
    /// Entry lifetime as a `Duration`
    pub fn ttl_duration(&self) -> Duration {
        Duration::from_secs(self.ttl)
    }

    /// Validate cache configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.enabled {
            if self.ttl == 0 {
                return Err("Cache TTL cannot be 0 when caching is enabled".to_string());
            }
            if self.max_capacity == 0 {
                return Err("Cache capacity cannot be 0 when caching is enabled".to_string());
            }
        }
        Ok(())
    }
}
