//! Application state shared across HTTP handlers

use crate::config::Config;
use crate::core::cache_manager::ResponseCache;
use crate::core::gold_price::GoldPriceService;
use crate::core::metals::MetalsClient;
use crate::utils::error::Result;
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// Everything a handler needs is constructed once at startup and injected
/// here; handlers never read the environment.
#[derive(Clone)]
pub struct AppState {
    /// Gateway configuration (shared read-only)
    pub config: Arc<Config>,
    /// Upstream response cache, also held by the client
    pub cache: Arc<ResponseCache>,
    /// Gold price lookup
    pub gold: Arc<GoldPriceService>,
}

impl AppState {
    /// Create a new AppState with shared resources
    pub fn new(config: Config, cache: Arc<ResponseCache>, gold: GoldPriceService) -> Self {
        Self {
            config: Arc::new(config),
            cache,
            gold: Arc::new(gold),
        }
    }

    /// Build the state from configuration, resolving the upstream credential
    pub fn from_config(config: &Config) -> Result<Self> {
        let cache = Arc::new(ResponseCache::new(config.cache()));
        let client = MetalsClient::new(config.upstream(), Arc::clone(&cache))?;
        let gold = GoldPriceService::new(client, config.response().format);

        Ok(Self::new(config.clone(), cache, gold))
    }

    /// Get gateway configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
