//! Upstream response cache
//!
//! A read-through cache of raw upstream HTTP responses keyed by the exact
//! outbound request signature. Entries expire a fixed time after insertion.
//! There is no single-flight: concurrent misses on one key all reach the
//! upstream.

pub mod manager;
pub mod types;

pub use manager::ResponseCache;
pub use types::{CacheKey, CacheStats, CachedResponse};
