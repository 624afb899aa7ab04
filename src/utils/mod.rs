//! Utility modules for the gateway
//!
//! - **error**: Error types and their HTTP representation
//! - **logging**: Tracing subscriber setup and log-safe formatting helpers

pub mod error;
pub mod logging;
