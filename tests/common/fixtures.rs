//! Test fixtures for the gateway

use actix_web::web;
use gold_price_gateway::Config;
use gold_price_gateway::config::ResponseFormat;
use gold_price_gateway::server::AppState;
use serde_json::{Value, json};
use wiremock::MockServer;

/// API key injected into test configurations
pub const TEST_API_KEY: &str = "test-key";

/// Path of the mocked latest-prices endpoint
pub const LATEST_PATH: &str = "/v1/latest";

/// Start a mock upstream
pub async fn mock_upstream() -> MockServer {
    MockServer::start().await
}

/// Configuration pointing at a mock upstream with a known API key
pub fn upstream_config(server: &MockServer, format: ResponseFormat) -> Config {
    let mut config = Config::default();
    config.gateway.upstream.base_url = format!("{}{}", server.uri(), LATEST_PATH);
    config.gateway.upstream.api_key = Some(TEST_API_KEY.to_string());
    config.gateway.response.format = format;
    config
}

/// Configuration with no API key anywhere
pub fn offline_config(base_url: &str) -> Config {
    let mut config = Config::default();
    config.gateway.upstream.base_url = base_url.to_string();
    config.gateway.upstream.api_key = None;
    config.gateway.upstream.api_key_env = vec!["GOLD_GATEWAY_TEST_NO_SUCH_VAR".to_string()];
    config
}

/// Build shared handler state
pub fn state_for(config: &Config) -> web::Data<AppState> {
    web::Data::new(AppState::from_config(config).expect("test state"))
}

/// Successful upstream body with the given gold price
pub fn gold_body(gold: f64) -> Value {
    json!({
        "status": "success",
        "currency": "USD",
        "unit": "toz",
        "metals": {
            "gold": gold,
            "silver": 24.5,
            "platinum": 950.0
        },
        "timestamps": {
            "metal": "2024-01-01T00:00:00.000Z"
        }
    })
}
