//! Upstream response types

use serde::Deserialize;
use serde_json::Value;

/// Body returned by the latest-prices endpoint on success
///
/// Every field is optional so a missing price and a malformed body are
/// distinguishable: the former deserializes, the latter does not.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct UpstreamQuote {
    #[serde(default)]
    pub metals: Option<MetalPrices>,
}

/// Spot prices keyed by metal, in the requested currency and unit
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct MetalPrices {
    #[serde(default)]
    pub gold: Option<f64>,
}

impl UpstreamQuote {
    /// Gold price, if the upstream sent one
    pub fn gold_price(&self) -> Option<f64> {
        self.metals.as_ref().and_then(|metals| metals.gold)
    }
}

/// Error text carried by a failed response, whatever else the body holds
///
/// Strings are used as-is; any other non-null value is rendered as JSON.
pub fn upstream_error_message(body: &Value) -> Option<String> {
    match body.get("error")? {
        Value::Null => None,
        Value::String(message) => Some(message.clone()),
        other => Some(other.to_string()),
    }
}
