//! Root info endpoint

use crate::server::state::AppState;
use actix_web::{HttpResponse, web};
use serde::Serialize;

/// Static greeting returned at `/`
#[derive(Debug, Serialize)]
pub struct InfoResponse<'a> {
    pub message: &'a str,
    pub developer: &'a str,
    #[serde(rename = "contact me at")]
    pub contact: &'a str,
}

/// Configure info routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(info));
}

/// GET /
pub async fn info(state: web::Data<AppState>) -> HttpResponse {
    let info = &state.config.response().info;

    HttpResponse::Ok().json(InfoResponse {
        message: &info.message,
        developer: &info.developer,
        contact: &info.contact,
    })
}
