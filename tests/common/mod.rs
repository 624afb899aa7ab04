//! Common test utilities

pub mod fixtures;

pub use fixtures::{
    LATEST_PATH, TEST_API_KEY, gold_body, mock_upstream, offline_config, state_for,
    upstream_config,
};
