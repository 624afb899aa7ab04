//! Server builder and run_server function
//!
//! This module provides the ServerBuilder for easier server configuration
//! and the run_server function used by the binary.

use crate::config::{Config, LoggingConfig, ResponseFormat};
use crate::server::server::HttpServer;
use crate::utils::error::{GatewayError, Result};
use crate::utils::logging::init_tracing;
use std::path::PathBuf;
use tracing::{info, warn};

/// Server builder for easier configuration
pub struct ServerBuilder {
    config: Option<Config>,
}

impl ServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self { config: None }
    }

    /// Set configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the HTTP server
    pub fn build(self) -> Result<HttpServer> {
        let config = self
            .config
            .ok_or_else(|| GatewayError::Config("Configuration is required".to_string()))?;

        HttpServer::new(&config)
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Startup options collected by the binary
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Configuration file path
    pub config_path: PathBuf,
    /// Bind host override
    pub host: Option<String>,
    /// Bind port override
    pub port: Option<u16>,
}

/// Load configuration, install logging and run the server until shutdown
///
/// A missing configuration file falls back to defaults, so the service runs
/// with nothing but the API key in the environment. A file that exists but
/// does not parse is an error.
pub async fn run_server(options: RunOptions) -> Result<()> {
    let file_config = if options.config_path.exists() {
        Some(Config::from_file(&options.config_path).await?)
    } else {
        None
    };

    let logging = file_config
        .as_ref()
        .map(|config| config.logging().clone())
        .unwrap_or_else(LoggingConfig::default);
    init_tracing(&logging);

    info!("Starting gold price gateway v{}", env!("CARGO_PKG_VERSION"));

    let config = match file_config {
        Some(config) => {
            info!("Configuration loaded from {}", options.config_path.display());
            config
        }
        None => {
            warn!(
                "Configuration file {} not found, using defaults",
                options.config_path.display()
            );
            Config::default()
        }
    };

    let config = config.with_bind_overrides(options.host, options.port)?;

    let server = ServerBuilder::new().with_config(config.clone()).build()?;
    info!("Server starting at: http://{}", config.server().address());
    info!("API Endpoints:");
    info!("   GET  /gold-price?currency=SAR&unit=g - Gold spot price");
    if config.response().format == ResponseFormat::Karat {
        info!("   GET  / - Service info");
    }
    info!("   GET  /health - Health check");

    server.start().await
}
