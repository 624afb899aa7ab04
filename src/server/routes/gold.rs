//! Gold price endpoint
//!
//! `GET /gold-price?currency=<code>&unit=<unit>`. Lookup failures are reported
//! as `{"error": "..."}` with status 200, so clients branch on the `error` key.

use crate::core::gold_price::PriceRequest;
use crate::server::state::AppState;
use crate::utils::error::Result;
use actix_web::{HttpRequest, HttpResponse, web};
use tracing::debug;

/// Query parameters, both optional
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GoldPriceQuery {
    pub currency: Option<String>,
    pub unit: Option<String>,
}

impl GoldPriceQuery {
    /// Parse a raw query string. A repeated key keeps its last value and
    /// unknown keys are ignored, so parsing never fails.
    pub fn parse(query: &str) -> Self {
        let mut parsed = Self::default();
        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "currency" => parsed.currency = Some(value.into_owned()),
                "unit" => parsed.unit = Some(value.into_owned()),
                _ => {}
            }
        }
        parsed
    }

    pub fn into_request(self) -> PriceRequest {
        PriceRequest::from_parts(self.currency.as_deref(), self.unit.as_deref())
    }
}

/// Configure gold price routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/gold-price", web::get().to(get_gold_price));
}

/// Get the current gold price
/// GET /gold-price
pub async fn get_gold_price(state: web::Data<AppState>, req: HttpRequest) -> Result<HttpResponse> {
    let request = GoldPriceQuery::parse(req.query_string()).into_request();
    debug!(currency = %request.currency, unit = %request.unit, "Gold price requested");

    let response = state.gold.get_gold_price(&request).await;

    Ok(HttpResponse::Ok().json(response))
}
