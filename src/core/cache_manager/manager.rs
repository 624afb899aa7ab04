//! Response cache implementation backed by `moka`

use super::types::{AtomicCacheStats, CacheKey, CacheStats, CachedResponse};
use crate::config::CacheConfig;
use moka::future::Cache;
use std::sync::atomic::Ordering;
use tracing::{debug, info};

/// Process-wide cache of upstream responses
pub struct ResponseCache {
    /// `None` when caching is disabled
    inner: Option<Cache<CacheKey, CachedResponse>>,
    stats: AtomicCacheStats,
}

impl ResponseCache {
    /// Create a cache from configuration
    pub fn new(config: &CacheConfig) -> Self {
        if !config.enabled {
            info!("Upstream response cache disabled");
            return Self::disabled();
        }

        info!(
            ttl_secs = config.ttl,
            max_capacity = config.max_capacity,
            "Upstream response cache enabled"
        );

        let inner = Cache::builder()
            .max_capacity(config.max_capacity)
            .time_to_live(config.ttl_duration())
            .build();

        Self {
            inner: Some(inner),
            stats: AtomicCacheStats::default(),
        }
    }

    /// A cache that never stores anything
    pub fn disabled() -> Self {
        Self {
            inner: None,
            stats: AtomicCacheStats::default(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.inner.is_some()
    }

    /// Look up a response, counting the outcome
    pub async fn get(&self, key: &CacheKey) -> Option<CachedResponse> {
        let cached = match &self.inner {
            Some(cache) => cache.get(key).await,
            None => None,
        };

        if cached.is_some() {
            self.stats.hits.fetch_add(1, Ordering::Relaxed);
            debug!("Upstream cache hit");
        } else {
            self.stats.misses.fetch_add(1, Ordering::Relaxed);
            debug!("Upstream cache miss");
        }

        cached
    }

    /// Store a response if it is cacheable
    ///
    /// Returns whether the response was stored.
    pub async fn put(&self, key: CacheKey, response: CachedResponse) -> bool {
        let Some(cache) = &self.inner else {
            return false;
        };

        if !response.is_cacheable() {
            debug!(status = response.status, "Not caching non-200 upstream response");
            return false;
        }

        cache.insert(key, response).await;
        self.stats.stores.fetch_add(1, Ordering::Relaxed);
        true
    }

    /// Current statistics
    pub async fn stats(&self) -> CacheStats {
        let entries = match &self.inner {
            Some(cache) => {
                cache.run_pending_tasks().await;
                cache.entry_count()
            }
            None => 0,
        };
        self.stats.snapshot(entries)
    }
}
