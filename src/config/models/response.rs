//! Response shape configuration

use serde::{Deserialize, Serialize};

/// Shape of a successful gold price response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ResponseFormat {
    /// `{"price", "currency", "unit"}`
    Single,
    /// `{"price 24 karat", "price 21 karat", "price 18 karat", "currency", "unit"}`
    #[default]
    Karat,
}

/// Response configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ResponseConfig {
    /// Success payload shape
    #[serde(default)]
    pub format: ResponseFormat,
    /// Payload served at `GET /`
    #[serde(default)]
    pub info: InfoConfig,
}

/// Static greeting served at the root path
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfoConfig {
    #[serde(default = "default_info_message")]
    pub message: String,
    #[serde(default = "default_info_developer")]
    pub developer: String,
    #[serde(default = "default_info_contact")]
    pub contact: String,
}

impl Default for InfoConfig {
    fn default() -> Self {
        Self {
            message: default_info_message(),
            developer: default_info_developer(),
            contact: default_info_contact(),
        }
    }
}

fn default_info_message() -> String {
    "Welcome to the Gold Price API. Use /gold-price?currency=SAR&unit=g".to_string()
}

fn default_info_developer() -> String {
    "Gold Price Gateway".to_string()
}

fn default_info_contact() -> String {
    "https://api.metals.dev".to_string()
}
