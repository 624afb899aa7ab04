//! Integration tests for gold-price-gateway
//!
//! These tests drive the actix application end to end against a mocked
//! upstream.

pub mod gold_price_tests;
