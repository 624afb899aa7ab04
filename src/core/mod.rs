//! Core gateway functionality
//!
//! - **cache_manager**: upstream response cache
//! - **metals**: metals.dev client and its error type
//! - **gold_price**: request normalization and response shaping

pub mod cache_manager;
pub mod gold_price;
pub mod metals;
