//! Failures of a single price lookup

use thiserror::Error;

pub const MISSING_CREDENTIAL_MESSAGE: &str = "API key not found in environment variables.";
pub const PRICE_UNAVAILABLE_MESSAGE: &str = "Gold price not available.";
pub const UPSTREAM_FALLBACK_MESSAGE: &str = "Failed to fetch price.";

/// Why a gold price lookup failed
///
/// `Display` yields exactly the text placed in the `{"error": ...}` body.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UpstreamError {
    /// No API key was configured
    #[error("{}", MISSING_CREDENTIAL_MESSAGE)]
    MissingCredential,

    /// Connection, TLS or timeout failure
    #[error("{message}")]
    Network { message: String },

    /// Upstream body was not the expected JSON
    #[error("{message}")]
    Parse { message: String },

    /// Upstream answered with a non-200 status
    #[error("{message}")]
    Status { status: u16, message: String },

    /// 200 response without `metals.gold`
    #[error("{}", PRICE_UNAVAILABLE_MESSAGE)]
    PriceUnavailable,
}

impl UpstreamError {
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Non-200 response, using the upstream's own error text when it sent one
    pub fn status(status: u16, message: Option<String>) -> Self {
        Self::Status {
            status,
            message: message.unwrap_or_else(|| UPSTREAM_FALLBACK_MESSAGE.to_string()),
        }
    }

    /// Short category name for logs
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingCredential => "missing_credential",
            Self::Network { .. } => "network",
            Self::Parse { .. } => "parse",
            Self::Status { .. } => "upstream_status",
            Self::PriceUnavailable => "price_unavailable",
        }
    }
}

/// The request URL carries the API key, so it is stripped from the message.
impl From<reqwest::Error> for UpstreamError {
    fn from(err: reqwest::Error) -> Self {
        Self::network(err.without_url().to_string())
    }
}

impl From<serde_json::Error> for UpstreamError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse(err.to_string())
    }
}
