//! HTTP-level integration tests for RFP structuring.

mod common;

use axum::http::StatusCode;
use common::{body_json, post_json};
use serde_json::json;

#[tokio::test]
async fn test_create_rfp_structures_request() {
    let app = common::build_test_app(rfp_db::create_pool());
    let text = "Need 10 laptops with 16GB RAM, budget 15000, delivery in 20 days, \
                1 year warranty, net 30";
    let response = post_json(app, "/api/rfp/create", json!({"text": text})).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["source_text"], text);

    let rfp = &json["structured_rfp"];
    assert_eq!(rfp["items"][0]["type"], "Laptops");
    assert_eq!(rfp["items"][0]["quantity"], 10);
    assert_eq!(rfp["items"][0]["specs"], "16GB RAM");
    assert_eq!(rfp["budget"], 15000);
    assert_eq!(rfp["delivery_days"], 20);
    assert_eq!(rfp["warranty"], "1 years");
    assert_eq!(rfp["payment_terms"], "Net 30");
    assert!(json["note"].as_str().unwrap().contains("pattern"));
}

#[tokio::test]
async fn test_create_rfp_missing_text_returns_400() {
    let app = common::build_test_app(rfp_db::create_pool());
    let response = post_json(app, "/api/rfp/create", json!({})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Missing input text");
}

#[tokio::test]
async fn test_create_rfp_blank_text_returns_400() {
    let app = common::build_test_app(rfp_db::create_pool());
    let response = post_json(app, "/api/rfp/create", json!({"text": "   "})).await;

    // Present but blank text is rejected by the generator's own validation.
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "Request text must not be empty");
}
