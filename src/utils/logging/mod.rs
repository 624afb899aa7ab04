//! Logging setup
//!
//! Installs the global `tracing` subscriber. `RUST_LOG` wins over the
//! configured level when it is set.

use crate::config::LoggingConfig;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the global tracing subscriber
///
/// Returns `false` when a subscriber was already installed, which happens when
/// the gateway is embedded in a process that configured tracing itself.
pub fn init_tracing(config: &LoggingConfig) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("gold_price_gateway={0},{0}", config.level)));

    let registry = tracing_subscriber::registry().with(filter);

    if config.json {
        registry
            .with(fmt::layer().json().with_target(true))
            .try_init()
            .is_ok()
    } else {
        registry
            .with(fmt::layer().with_target(false).with_thread_ids(false))
            .try_init()
            .is_ok()
    }
}

/// Mask a secret for log output, keeping only a short prefix
pub fn mask_secret(secret: &str) -> String {
    if secret.len() > 4 {
        let prefix: String = secret.chars().take(4).collect();
        format!("{}...", prefix)
    } else {
        "***".to_string()
    }
}

/// Replace the `api_key` query parameter of a URL with a masked value
pub fn redact_url(url: &url::Url) -> String {
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            if k == "api_key" {
                (k.into_owned(), mask_secret(&v))
            } else {
                (k.into_owned(), v.into_owned())
            }
        })
        .collect();

    let mut redacted = url.clone();
    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted.to_string()
}
