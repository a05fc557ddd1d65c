mod common;

use actix_web::{http::StatusCode, test};
use common::{setup_test_app, StubSummarizer};
use serde_json::{json, Value};
use std::sync::Arc;

fn assert_security_headers(resp: &actix_web::dev::ServiceResponse) {
    let headers = resp.headers();
    assert_eq!(headers.get("x-content-type-options").unwrap(), "nosniff");
    assert_eq!(headers.get("x-frame-options").unwrap(), "DENY");
    assert_eq!(headers.get("x-xss-protection").unwrap(), "1; mode=block");
}

#[actix_web::test]
async fn test_favicon_returns_no_content() {
    let app = setup_test_app(Arc::new(StubSummarizer::fixed("summary"))).await;

    let req = test::TestRequest::get().uri("/favicon.ico").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert_security_headers(&resp);
    let body = test::read_body(resp).await;
    assert!(body.is_empty());
}

#[actix_web::test]
async fn test_index_serves_ui() {
    let app = setup_test_app(Arc::new(StubSummarizer::fixed("summary"))).await;

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_security_headers(&resp);
    let content_type = resp.headers().get("content-type").unwrap().to_str().unwrap();
    assert!(content_type.starts_with("text/html"));

    let body = test::read_body(resp).await;
    let html = std::str::from_utf8(&body).unwrap();
    assert!(html.contains("data-summarize-url=\"/summarize\""));
    assert!(html.contains("/static/js/app.js"));
}

#[actix_web::test]
async fn test_script_is_served() {
    let app = setup_test_app(Arc::new(StubSummarizer::fixed("summary"))).await;

    let req = test::TestRequest::get().uri("/static/js/app.js").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let content_type = resp.headers().get("content-type").unwrap().to_str().unwrap();
    assert!(content_type.starts_with("application/javascript"));
}

#[actix_web::test]
async fn test_health_reports_model() {
    let app = setup_test_app(Arc::new(StubSummarizer::fixed("summary"))).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "status": "ok", "model": "stub/summarizer" }));
}

#[actix_web::test]
async fn test_error_responses_carry_security_headers() {
    let app = setup_test_app(Arc::new(StubSummarizer::fixed("summary"))).await;

    let req = test::TestRequest::post()
        .uri("/summarize")
        .set_json(json!({ "text": "" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_security_headers(&resp);
}

#[actix_web::test]
async fn test_unknown_route_carries_security_headers() {
    let app = setup_test_app(Arc::new(StubSummarizer::fixed("summary"))).await;

    let req = test::TestRequest::get().uri("/does-not-exist").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_security_headers(&resp);
}

#[actix_web::test]
async fn test_request_id_is_generated_and_echoed() {
    let app = setup_test_app(Arc::new(StubSummarizer::fixed("summary"))).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    let generated = resp.headers().get("x-request-id").unwrap().to_str().unwrap();
    assert!(uuid::Uuid::parse_str(generated).is_ok());

    let req = test::TestRequest::get()
        .uri("/health")
        .insert_header(("X-Request-Id", "client-123"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.headers().get("x-request-id").unwrap(), "client-123");
}
