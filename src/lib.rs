//! # Gold Price Gateway
//!
//! A small caching proxy in front of the metals.dev spot price API.
//!
//! The gateway keeps the upstream API key on the server side, caches upstream
//! responses for twelve hours and reshapes the upstream quote into either a
//! single rounded price or a 24/21/18 karat breakdown.
//!
//! ## Gateway Mode
//!
//! ```rust,no_run
//! use gold_price_gateway::{Config, Gateway};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/gateway.yaml").await?;
//!     let gateway = Gateway::new(config)?;
//!     gateway.run().await?;
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod server;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use utils::error::{GatewayError, Result};

pub use crate::core::gold_price::{GoldPriceService, PriceRequest, PriceResponse};
pub use crate::core::metals::{MetalsClient, UpstreamError};

use tracing::info;

/// A gateway instance bound to one configuration
pub struct Gateway {
    server: server::HttpServer,
}

impl Gateway {
    /// Create a new gateway instance
    pub fn new(config: Config) -> Result<Self> {
        info!("Creating new gateway instance");

        let server = server::HttpServer::new(&config)?;

        Ok(Self { server })
    }

    /// Run the gateway server
    pub async fn run(self) -> Result<()> {
        info!("Starting gold price gateway");
        self.server.start().await
    }
}

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
