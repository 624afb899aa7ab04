//! metals.dev upstream integration
//!
//! [`MetalsClient`] issues the single outbound call this gateway makes and
//! answers repeated calls from the [`ResponseCache`](crate::core::cache_manager::ResponseCache).

pub mod client;
pub mod error;
pub mod types;

pub use client::MetalsClient;
pub use error::UpstreamError;
pub use types::{MetalPrices, UpstreamQuote, upstream_error_message};
