//! Response cache type definitions

use bytes::Bytes;
use reqwest::Method;
use reqwest::header::HeaderMap;
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

/// Signature of an outbound request
///
/// Two requests share a cache entry only when method, full URL (query
/// included) and every header match. Header names are lowercased and sorted so
/// insertion order does not matter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    /// Build the key for an outbound request
    pub fn for_request(method: &Method, url: &url::Url, headers: &HeaderMap) -> Self {
        let mut header_parts: Vec<String> = headers
            .iter()
            .map(|(name, value)| {
                format!(
                    "{}={}",
                    name.as_str().to_ascii_lowercase(),
                    String::from_utf8_lossy(value.as_bytes())
                )
            })
            .collect();
        header_parts.sort();

        Self(format!("{} {} [{}]", method, url, header_parts.join(";")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Raw upstream response as stored in the cache
#[derive(Debug, Clone, PartialEq)]
pub struct CachedResponse {
    /// HTTP status code
    pub status: u16,
    /// Undecoded response body
    pub body: Bytes,
}

impl CachedResponse {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Only successful responses are worth replaying
    pub fn is_cacheable(&self) -> bool {
        self.status == 200
    }
}

/// Atomic counters updated on the request path
#[derive(Debug, Default)]
pub(crate) struct AtomicCacheStats {
    pub hits: AtomicU64,
    pub misses: AtomicU64,
    pub stores: AtomicU64,
}

impl AtomicCacheStats {
    pub fn snapshot(&self, entries: u64) -> CacheStats {
        CacheStats {
            entries,
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            stores: self.stores.load(Ordering::Relaxed),
        }
    }
}

/// Cache statistics snapshot
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct CacheStats {
    /// Live entries
    pub entries: u64,
    /// Lookups answered from the cache
    pub hits: u64,
    /// Lookups that went to the upstream
    pub misses: u64,
    /// Responses written to the cache
    pub stores: u64,
}

impl CacheStats {
    /// Calculate hit rate
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}
