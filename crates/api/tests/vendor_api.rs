//! HTTP-level integration tests for vendor registration, listing and the
//! simulated RFP dispatch.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, get, post_json};
use serde_json::json;
use tower::ServiceExt;

// ---------------------------------------------------------------------------
// Registration
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_create_vendor_returns_201() {
    let app = common::build_test_app(rfp_db::create_pool());
    let response = post_json(
        app,
        "/api/vendors",
        json!({"name": "  Acme Supplies ", "email": "sales@acme.test"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Vendor added successfully");
    assert_eq!(json["vendor"]["id"], 1);
    assert_eq!(json["vendor"]["name"], "Acme Supplies");
    assert_eq!(json["vendor"]["email"], "sales@acme.test");
}

#[tokio::test]
async fn test_create_vendor_missing_field_returns_400() {
    let app = common::build_test_app(rfp_db::create_pool());
    let response = post_json(app, "/api/vendors", json!({"name": "Acme"})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Vendor name and email required");
    assert_eq!(json["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_create_vendor_invalid_email_returns_400() {
    let app = common::build_test_app(rfp_db::create_pool());
    let response = post_json(
        app,
        "/api/vendors",
        json!({"name": "Acme", "email": "not-an-address"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_create_vendor_malformed_body_returns_json_400() {
    let app = common::build_test_app(rfp_db::create_pool());
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/vendors")
        .header("content-type", "application/json")
        .body(Body::from("{\"name\": \"Acme\","))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}

// ---------------------------------------------------------------------------
// Listing and lookup
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_list_vendors_in_registration_order() {
    let pool = rfp_db::create_pool();
    for (name, email) in [("Acme", "a@acme.test"), ("Globex", "g@globex.test")] {
        post_json(
            common::build_test_app(pool.clone()),
            "/api/vendors",
            json!({"name": name, "email": email}),
        )
        .await;
    }

    let response = get(common::build_test_app(pool), "/api/vendors").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let vendors = json.as_array().unwrap();
    assert_eq!(vendors.len(), 2);
    assert_eq!(vendors[0]["id"], 1);
    assert_eq!(vendors[1]["name"], "Globex");
}

#[tokio::test]
async fn test_get_vendor_by_id_and_missing() {
    let pool = rfp_db::create_pool();
    post_json(
        common::build_test_app(pool.clone()),
        "/api/vendors",
        json!({"name": "Acme", "email": "a@acme.test"}),
    )
    .await;

    let response = get(common::build_test_app(pool.clone()), "/api/vendors/1").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["name"], "Acme");

    let response = get(common::build_test_app(pool), "/api/vendors/99").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}

// ---------------------------------------------------------------------------
// Simulated dispatch
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_send_rfp_without_vendors() {
    let app = common::build_test_app(rfp_db::create_pool());
    let response = post_json(app, "/api/send-rfp", json!({})).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "No vendors available to receive the RFP");
    assert!(json.get("sent_to").is_none());
}

#[tokio::test]
async fn test_send_rfp_to_every_vendor() {
    let pool = rfp_db::create_pool();
    for (name, email) in [("Acme", "a@acme.test"), ("Globex", "g@globex.test")] {
        post_json(
            common::build_test_app(pool.clone()),
            "/api/vendors",
            json!({"name": name, "email": email}),
        )
        .await;
    }

    let response = post_json(common::build_test_app(pool), "/api/send-rfp", json!({})).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let sent = json["sent_to"].as_array().unwrap();
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[0]["vendor_id"], 1);
    assert_eq!(sent[0]["vendor_name"], "Acme");
    assert_eq!(sent[1]["email"], "g@globex.test");
    assert_eq!(sent[1]["status"], "RFP sent (simulated)");
}
