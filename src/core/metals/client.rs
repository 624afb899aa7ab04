//! HTTP client for the metals.dev latest-prices endpoint

use super::error::UpstreamError;
use super::types::{UpstreamQuote, upstream_error_message};
use crate::config::UpstreamConfig;
use crate::core::cache_manager::{CacheKey, CachedResponse, ResponseCache};
use crate::utils::error::{GatewayError, Result};
use crate::utils::logging::redact_url;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use reqwest::{Client, Method};
use std::sync::Arc;
use tracing::{debug, info, warn};
use url::Url;

/// Client for the upstream pricing API
pub struct MetalsClient {
    http: Client,
    base_url: Url,
    api_key: Option<String>,
    cache: Arc<ResponseCache>,
}

impl MetalsClient {
    /// Create a client, resolving the API key from config or environment
    pub fn new(config: &UpstreamConfig, cache: Arc<ResponseCache>) -> Result<Self> {
        let api_key = config.resolve_api_key();
        if api_key.is_none() {
            warn!(
                env = ?config.api_key_env,
                "No upstream API key configured; gold price requests will fail"
            );
        }
        Self::with_api_key(config, api_key, cache)
    }

    /// Create a client with an explicit API key, bypassing the environment
    pub fn with_api_key(
        config: &UpstreamConfig,
        api_key: Option<String>,
        cache: Arc<ResponseCache>,
    ) -> Result<Self> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            GatewayError::config(format!(
                "Invalid upstream base URL '{}': {}",
                config.base_url, e
            ))
        })?;

        let mut builder = Client::builder().user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        info!(base_url = %base_url, "Upstream client ready");

        Ok(Self {
            http,
            base_url,
            api_key: api_key.filter(|key| !key.is_empty()),
            cache,
        })
    }

    /// Whether an API key is available
    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    /// Build the outbound URL for already-normalized currency and unit
    pub fn latest_url(&self, currency: &str, unit: &str) -> std::result::Result<Url, UpstreamError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(UpstreamError::MissingCredential)?;

        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("api_key", api_key)
            .append_pair("currency", currency)
            .append_pair("unit", unit);
        Ok(url)
    }

    fn request_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers
    }

    /// Fetch the latest quote
    ///
    /// Serves from cache when an identical request succeeded within the TTL.
    /// The body must be JSON whatever the status. A non-200 status becomes
    /// [`UpstreamError::Status`] before the price fields are looked at.
    pub async fn fetch_latest(
        &self,
        currency: &str,
        unit: &str,
    ) -> std::result::Result<UpstreamQuote, UpstreamError> {
        let url = self.latest_url(currency, unit)?;
        let headers = Self::request_headers();
        let key = CacheKey::for_request(&Method::GET, &url, &headers);

        let response = match self.cache.get(&key).await {
            Some(cached) => cached,
            None => {
                let fetched = self.send(url, headers).await?;
                self.cache.put(key, fetched.clone()).await;
                fetched
            }
        };

        let body: serde_json::Value = serde_json::from_slice(&response.body)?;

        if response.status != 200 {
            return Err(UpstreamError::status(
                response.status,
                upstream_error_message(&body),
            ));
        }

        Ok(serde_json::from_value(body)?)
    }

    async fn send(
        &self,
        url: Url,
        headers: HeaderMap,
    ) -> std::result::Result<CachedResponse, UpstreamError> {
        debug!(url = %redact_url(&url), "Calling upstream");

        let response = self
            .http
            .request(Method::GET, url)
            .headers(headers)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.bytes().await?;

        debug!(status, bytes = body.len(), "Upstream responded");
        Ok(CachedResponse::new(status, body))
    }
}
