//! Error handling for the Gateway
//!
//! This module defines the startup and server-level error types. Failures of a
//! single price lookup live in [`crate::core::metals::UpstreamError`] and never
//! reach this type.

mod helpers;
mod response;
mod types;

pub use response::{ErrorDetail, ErrorResponse};
pub use types::{GatewayError, Result};
