//! Main gateway configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Main gateway configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GatewayConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Upstream pricing API configuration
    #[serde(default)]
    pub upstream: UpstreamConfig,
    /// Response cache configuration
    #[serde(default)]
    pub cache: CacheConfig,
    /// Response shape configuration
    #[serde(default)]
    pub response: ResponseConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}
