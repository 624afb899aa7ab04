//! Gold price endpoint tests
//!
//! Every failure mode must still answer 200 with a single `error` key.

#[cfg(test)]
mod tests {
    use crate::common::{
        LATEST_PATH, TEST_API_KEY, gold_body, mock_upstream, offline_config, state_for,
        upstream_config,
    };
    use actix_web::{http::StatusCode, test};
    use gold_price_gateway::config::ResponseFormat;
    use gold_price_gateway::server::HttpServer;
    use serde_json::{Value, json};
    use std::time::Duration;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, ResponseTemplate};

    fn assert_only_error(body: &Value, expected: Option<&str>) {
        let object = body.as_object().expect("object body");
        assert_eq!(object.len(), 1, "unexpected body: {}", body);
        let message = object["error"].as_str().expect("error string");
        assert!(!message.is_empty());
        if let Some(expected) = expected {
            assert_eq!(message, expected);
        }
    }

    fn assert_no_credential(body: &Value) {
        let text = body.to_string();
        assert!(!text.contains(TEST_API_KEY), "API key leaked: {}", text);
        assert!(!text.contains("api_key="), "request URL leaked: {}", text);
    }

    // ==================== Success Shapes ====================

    #[actix_web::test]
    async fn test_karat_breakdown_end_to_end() {
        let upstream = mock_upstream().await;
        Mock::given(method("GET"))
            .and(path(LATEST_PATH))
            .and(query_param("api_key", TEST_API_KEY))
            .and(query_param("currency", "USD"))
            .and(query_param("unit", "oz"))
            .and(header("accept", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(gold_body(2000.0)))
            .expect(1)
            .mount(&upstream)
            .await;

        let state = state_for(&upstream_config(&upstream, ResponseFormat::Karat));
        let app = test::init_service(HttpServer::create_app(state)).await;

        let req = test::TestRequest::get()
            .uri("/gold-price?currency=USD&unit=oz")
            .to_request();
        let body = test::call_and_read_body(&app, req).await;

        assert_eq!(
            std::str::from_utf8(&body).unwrap(),
            r#"{"price 24 karat":2000.0,"price 21 karat":1750.0,"price 18 karat":1500.0,"currency":"USD","unit":"oz"}"#
        );
    }

    #[actix_web::test]
    async fn test_single_price_rounds_to_two_places() {
        let upstream = mock_upstream().await;
        Mock::given(method("GET"))
            .and(path(LATEST_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(gold_body(251.98765)))
            .expect(1)
            .mount(&upstream)
            .await;

        let state = state_for(&upstream_config(&upstream, ResponseFormat::Single));
        let app = test::init_service(HttpServer::create_app(state)).await;

        let req = test::TestRequest::get().uri("/gold-price").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body, json!({"price": 251.99, "currency": "SAR", "unit": "g"}));
    }

    #[actix_web::test]
    async fn test_defaults_are_sar_and_grams() {
        let upstream = mock_upstream().await;
        Mock::given(method("GET"))
            .and(path(LATEST_PATH))
            .and(query_param("currency", "SAR"))
            .and(query_param("unit", "g"))
            .respond_with(ResponseTemplate::new(200).set_body_json(gold_body(240.0)))
            .expect(1)
            .mount(&upstream)
            .await;

        let state = state_for(&upstream_config(&upstream, ResponseFormat::Karat));
        let app = test::init_service(HttpServer::create_app(state)).await;

        let req = test::TestRequest::get().uri("/gold-price").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["price 24 karat"], 240.0);
        assert_eq!(body["price 21 karat"], 210.0);
        assert_eq!(body["price 18 karat"], 180.0);
        assert_eq!(body["currency"], "SAR");
        assert_eq!(body["unit"], "g");
    }

    #[actix_web::test]
    async fn test_case_is_normalized_before_forwarding() {
        let upstream = mock_upstream().await;
        Mock::given(method("GET"))
            .and(path(LATEST_PATH))
            .and(query_param("currency", "EUR"))
            .and(query_param("unit", "kg"))
            .respond_with(ResponseTemplate::new(200).set_body_json(gold_body(60000.0)))
            .expect(1)
            .mount(&upstream)
            .await;

        let state = state_for(&upstream_config(&upstream, ResponseFormat::Karat));
        let app = test::init_service(HttpServer::create_app(state)).await;

        let req = test::TestRequest::get()
            .uri("/gold-price?currency=eur&unit=KG")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["currency"], "EUR");
        assert_eq!(body["unit"], "kg");
    }

    #[actix_web::test]
    async fn test_unknown_currency_is_forwarded_as_is() {
        let upstream = mock_upstream().await;
        Mock::given(method("GET"))
            .and(path(LATEST_PATH))
            .and(query_param("currency", "XYZ"))
            .respond_with(ResponseTemplate::new(200).set_body_json(gold_body(1.0)))
            .expect(1)
            .mount(&upstream)
            .await;

        let state = state_for(&upstream_config(&upstream, ResponseFormat::Karat));
        let app = test::init_service(HttpServer::create_app(state)).await;

        let req = test::TestRequest::get()
            .uri("/gold-price?currency=xyz")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["currency"], "XYZ");
    }

    // ==================== Error Bodies ====================

    #[actix_web::test]
    async fn test_missing_credential_never_calls_upstream() {
        let upstream = mock_upstream().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(gold_body(1.0)))
            .expect(0)
            .mount(&upstream)
            .await;

        let config = offline_config(&format!("{}{}", upstream.uri(), LATEST_PATH));
        let app = test::init_service(HttpServer::create_app(state_for(&config))).await;

        for uri in ["/gold-price", "/gold-price?currency=usd&unit=oz"] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::OK);

            let body: Value = test::read_body_json(resp).await;
            assert_eq!(
                body,
                json!({"error": "API key not found in environment variables."})
            );
        }
    }

    #[actix_web::test]
    async fn test_missing_gold_field() {
        let upstream = mock_upstream().await;
        Mock::given(method("GET"))
            .and(path(LATEST_PATH))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"status": "success", "metals": {"silver": 24.5}})),
            )
            .mount(&upstream)
            .await;

        let state = state_for(&upstream_config(&upstream, ResponseFormat::Karat));
        let app = test::init_service(HttpServer::create_app(state)).await;

        let req = test::TestRequest::get().uri("/gold-price").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_only_error(&body, Some("Gold price not available."));
    }

    #[actix_web::test]
    async fn test_upstream_error_message_is_passed_through() {
        let upstream = mock_upstream().await;
        Mock::given(method("GET"))
            .and(path(LATEST_PATH))
            .respond_with(
                ResponseTemplate::new(429).set_body_json(json!({"error": "rate limited"})),
            )
            .mount(&upstream)
            .await;

        let state = state_for(&upstream_config(&upstream, ResponseFormat::Karat));
        let app = test::init_service(HttpServer::create_app(state)).await;

        let req = test::TestRequest::get().uri("/gold-price").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({"error": "rate limited"}));
    }

    #[actix_web::test]
    async fn test_upstream_error_without_message_uses_fallback() {
        let upstream = mock_upstream().await;
        Mock::given(method("GET"))
            .and(path(LATEST_PATH))
            .respond_with(
                ResponseTemplate::new(500).set_body_json(json!({"status": "failure"})),
            )
            .mount(&upstream)
            .await;

        let state = state_for(&upstream_config(&upstream, ResponseFormat::Single));
        let app = test::init_service(HttpServer::create_app(state)).await;

        let req = test::TestRequest::get().uri("/gold-price").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_only_error(&body, Some("Failed to fetch price."));
    }

    #[actix_web::test]
    async fn test_malformed_json_becomes_error_body() {
        let upstream = mock_upstream().await;
        Mock::given(method("GET"))
            .and(path(LATEST_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&upstream)
            .await;

        let state = state_for(&upstream_config(&upstream, ResponseFormat::Karat));
        let app = test::init_service(HttpServer::create_app(state)).await;

        let req = test::TestRequest::get().uri("/gold-price").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_only_error(&body, None);
    }

    #[actix_web::test]
    async fn test_non_numeric_gold_becomes_error_body() {
        let upstream = mock_upstream().await;
        Mock::given(method("GET"))
            .and(path(LATEST_PATH))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"metals": {"gold": "n/a"}})),
            )
            .mount(&upstream)
            .await;

        let state = state_for(&upstream_config(&upstream, ResponseFormat::Karat));
        let app = test::init_service(HttpServer::create_app(state)).await;

        let req = test::TestRequest::get().uri("/gold-price").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_only_error(&body, None);
    }

    #[actix_web::test]
    async fn test_connection_failure_becomes_error_body() {
        // Nothing listens on port 9 of the loopback interface in test environments.
        let mut config = offline_config("http://127.0.0.1:9/v1/latest");
        config.gateway.upstream.api_key = Some(TEST_API_KEY.to_string());

        let app = test::init_service(HttpServer::create_app(state_for(&config))).await;

        let req = test::TestRequest::get().uri("/gold-price").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_only_error(&body, None);
        assert_no_credential(&body);
    }

    #[actix_web::test]
    async fn test_configured_timeout_becomes_error_body() {
        let upstream = mock_upstream().await;
        Mock::given(method("GET"))
            .and(path(LATEST_PATH))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(gold_body(2000.0))
                    .set_delay(Duration::from_secs(3)),
            )
            .mount(&upstream)
            .await;

        let mut config = upstream_config(&upstream, ResponseFormat::Karat);
        config.gateway.upstream.timeout_secs = Some(1);

        let app = test::init_service(HttpServer::create_app(state_for(&config))).await;

        let req = test::TestRequest::get().uri("/gold-price").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_only_error(&body, None);
        assert_no_credential(&body);
    }

    #[actix_web::test]
    async fn test_upstream_error_wins_over_malformed_price_fields() {
        let upstream = mock_upstream().await;
        Mock::given(method("GET"))
            .and(path(LATEST_PATH))
            .respond_with(ResponseTemplate::new(503).set_body_json(
                json!({"error": "maintenance", "metals": {"gold": "n/a"}}),
            ))
            .mount(&upstream)
            .await;

        let state = state_for(&upstream_config(&upstream, ResponseFormat::Karat));
        let app = test::init_service(HttpServer::create_app(state)).await;

        let req = test::TestRequest::get().uri("/gold-price").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body, json!({"error": "maintenance"}));
    }

    #[actix_web::test]
    async fn test_missing_metals_object() {
        let upstream = mock_upstream().await;
        Mock::given(method("GET"))
            .and(path(LATEST_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "success"})))
            .mount(&upstream)
            .await;

        let state = state_for(&upstream_config(&upstream, ResponseFormat::Single));
        let app = test::init_service(HttpServer::create_app(state)).await;

        let req = test::TestRequest::get().uri("/gold-price").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_only_error(&body, Some("Gold price not available."));
    }

    // ==================== Query Handling ====================

    #[actix_web::test]
    async fn test_repeated_query_key_uses_last_value() {
        let upstream = mock_upstream().await;
        Mock::given(method("GET"))
            .and(path(LATEST_PATH))
            .and(query_param("currency", "EUR"))
            .and(query_param("unit", "oz"))
            .respond_with(ResponseTemplate::new(200).set_body_json(gold_body(1800.0)))
            .expect(1)
            .mount(&upstream)
            .await;

        let state = state_for(&upstream_config(&upstream, ResponseFormat::Single));
        let app = test::init_service(HttpServer::create_app(state)).await;

        let req = test::TestRequest::get()
            .uri("/gold-price?currency=usd&currency=eur&unit=g&unit=oz")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({"price": 1800.0, "currency": "EUR", "unit": "oz"}));
    }

    #[actix_web::test]
    async fn test_unknown_query_keys_are_ignored() {
        let upstream = mock_upstream().await;
        Mock::given(method("GET"))
            .and(path(LATEST_PATH))
            .and(query_param("currency", "SAR"))
            .and(query_param("unit", "g"))
            .respond_with(ResponseTemplate::new(200).set_body_json(gold_body(250.0)))
            .expect(1)
            .mount(&upstream)
            .await;

        let state = state_for(&upstream_config(&upstream, ResponseFormat::Single));
        let app = test::init_service(HttpServer::create_app(state)).await;

        let req = test::TestRequest::get()
            .uri("/gold-price?lang=ar&source=web")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }
}
