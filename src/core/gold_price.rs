//! Gold price lookup and response shaping
//!
//! The upstream quote is treated as the 24 karat (pure gold) price. Lower
//! purities scale linearly by karat/24.

use crate::config::ResponseFormat;
use crate::core::metals::{MetalsClient, UpstreamError};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

pub const DEFAULT_CURRENCY: &str = "SAR";
pub const DEFAULT_UNIT: &str = "g";

/// Normalized price request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceRequest {
    /// Uppercased currency code
    pub currency: String,
    /// Lowercased mass unit
    pub unit: String,
}

impl PriceRequest {
    /// Build a request, normalizing case. Values are not checked against any
    /// list of known currencies or units.
    pub fn new(currency: impl AsRef<str>, unit: impl AsRef<str>) -> Self {
        Self {
            currency: currency.as_ref().to_uppercase(),
            unit: unit.as_ref().to_lowercase(),
        }
    }

    /// Build a request from optional query values, applying defaults
    pub fn from_parts(currency: Option<&str>, unit: Option<&str>) -> Self {
        Self::new(
            currency.unwrap_or(DEFAULT_CURRENCY),
            unit.unwrap_or(DEFAULT_UNIT),
        )
    }
}

impl Default for PriceRequest {
    fn default() -> Self {
        Self::new(DEFAULT_CURRENCY, DEFAULT_UNIT)
    }
}

/// Per-purity prices
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KaratPrices {
    #[serde(rename = "price 24 karat")]
    pub karat_24: f64,
    #[serde(rename = "price 21 karat")]
    pub karat_21: f64,
    #[serde(rename = "price 18 karat")]
    pub karat_18: f64,
    pub currency: String,
    pub unit: String,
}

/// Body of a `/gold-price` response
///
/// Exactly one of the price fields or `error` is present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PriceResponse {
    Single {
        price: f64,
        currency: String,
        unit: String,
    },
    Karat(KaratPrices),
    Error {
        error: String,
    },
}

impl PriceResponse {
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            error: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }
}

impl From<UpstreamError> for PriceResponse {
    fn from(err: UpstreamError) -> Self {
        Self::error(err.to_string())
    }
}

/// Round to two decimal places, ties to even on the exact decimal value
pub fn round_price(value: f64) -> f64 {
    format!("{:.2}", value).parse().unwrap_or(value)
}

/// Price of `karat` gold given the pure (24 karat) price
pub fn karat_price(pure: f64, karat: u8) -> f64 {
    round_price(pure * f64::from(karat) / 24.0)
}

/// Shape a pure gold price into the configured success payload
pub fn shape_price(value: f64, request: &PriceRequest, format: ResponseFormat) -> PriceResponse {
    match format {
        ResponseFormat::Single => PriceResponse::Single {
            price: round_price(value),
            currency: request.currency.clone(),
            unit: request.unit.clone(),
        },
        ResponseFormat::Karat => PriceResponse::Karat(KaratPrices {
            karat_24: round_price(value),
            karat_21: karat_price(value, 21),
            karat_18: karat_price(value, 18),
            currency: request.currency.clone(),
            unit: request.unit.clone(),
        }),
    }
}

/// Gold price service used by the HTTP layer
pub struct GoldPriceService {
    client: MetalsClient,
    format: ResponseFormat,
}

impl GoldPriceService {
    pub fn new(client: MetalsClient, format: ResponseFormat) -> Self {
        Self { client, format }
    }

    pub fn format(&self) -> ResponseFormat {
        self.format
    }

    pub fn has_credential(&self) -> bool {
        self.client.has_credential()
    }

    /// Look up the gold price, keeping the failure typed
    pub async fn quote(&self, request: &PriceRequest) -> Result<PriceResponse, UpstreamError> {
        let quote = self
            .client
            .fetch_latest(&request.currency, &request.unit)
            .await?;

        let value = quote.gold_price().ok_or(UpstreamError::PriceUnavailable)?;

        Ok(shape_price(value, request, self.format))
    }

    /// Look up the gold price, collapsing any failure into an error body
    pub async fn get_gold_price(&self, request: &PriceRequest) -> PriceResponse {
        match self.quote(request).await {
            Ok(response) => {
                info!(
                    currency = %request.currency,
                    unit = %request.unit,
                    "Gold price served"
                );
                response
            }
            Err(err) => {
                warn!(
                    currency = %request.currency,
                    unit = %request.unit,
                    kind = err.kind(),
                    error = %err,
                    "Gold price lookup failed"
                );
                err.into()
            }
        }
    }
}
