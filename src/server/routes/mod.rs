//! HTTP routes

pub mod gold;
pub mod info;

use crate::config::ResponseFormat;
use actix_web::web;

/// Configure the public API routes
///
/// The root info payload belongs to the karat deployment only.
pub fn configure_routes(cfg: &mut web::ServiceConfig, format: ResponseFormat) {
    gold::configure_routes(cfg);
    if format == ResponseFormat::Karat {
        info::configure_routes(cfg);
    }
}
