//! Album API Behavior Tests
//!
//! Exercise the full router against the in-memory store, covering the
//! externally observable properties of the service:
//! - POST then GET round-trips a record
//! - deleting or updating a missing id fails
//! - an empty catalog lists as `{"data": []}`
//! - malformed JSON bodies are rejected with 400, never 500 or a crash

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use albumstore::config::HttpServerConfig;
use albumstore::http_server::HttpServer;
use albumstore::store::{Album, MemoryAlbumStore};

// =============================================================================
// Test Utilities
// =============================================================================

fn test_router(albums: Vec<Album>) -> Router {
    let store = Arc::new(MemoryAlbumStore::with_albums(albums));
    HttpServer::new(HttpServerConfig::default(), store).router()
}

fn sample_album() -> Album {
    Album {
        id: "rec-001".to_string(),
        title: "Blue Train".to_string(),
        artist: "John Coltrane".to_string(),
        price: 56.99,
    }
}

async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

async fn send_empty(router: Router, method: &str, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(router, request).await
}

async fn send_json(router: Router, method: &str, uri: &str, body: Value) -> (StatusCode, Value) {
    send_raw(router, method, uri, &body.to_string()).await
}

async fn send_raw(router: Router, method: &str, uri: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(router, request).await
}

// =============================================================================
// Listing
// =============================================================================

#[tokio::test]
async fn test_empty_catalog_lists_as_empty_array() {
    let router = test_router(vec![]);

    let (status, body) = send_empty(router, "GET", "/albums").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "data": [] }));
}

#[tokio::test]
async fn test_listing_returns_every_album() {
    let mut other = sample_album();
    other.id = "rec-002".to_string();
    let router = test_router(vec![sample_album(), other]);

    let (status, body) = send_empty(router, "GET", "/albums").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
}

// =============================================================================
// Create + Fetch
// =============================================================================

#[tokio::test]
async fn test_create_then_fetch_round_trips() {
    let router = test_router(vec![]);

    let (status, body) = send_json(
        router.clone(),
        "POST",
        "/albums",
        json!({
            "id": "rec-001",
            "title": "Blue Train",
            "artist": "John Coltrane",
            "price": 56.99
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "album created successfully");

    let (status, body) = send_empty(router, "GET", "/albums/rec-001").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "data": {
                "id": "rec-001",
                "title": "Blue Train",
                "artist": "John Coltrane",
                "price": 56.99
            }
        })
    );
}

#[tokio::test]
async fn test_fetch_missing_album_is_internal_error() {
    let router = test_router(vec![]);

    let (status, body) = send_empty(router, "GET", "/albums/nope").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().contains("not found"));
}

#[tokio::test]
async fn test_create_duplicate_id_is_bad_request() {
    let router = test_router(vec![sample_album()]);

    let (status, body) = send_json(
        router,
        "POST",
        "/albums",
        serde_json::to_value(sample_album()).unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("already exists"));
}

#[tokio::test]
async fn test_create_with_malformed_json_is_bad_request() {
    let router = test_router(vec![]);

    let (status, _) = send_raw(router, "POST", "/albums", "{not json").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_with_missing_field_is_bad_request() {
    let router = test_router(vec![]);

    let (status, _) = send_json(
        router,
        "POST",
        "/albums",
        json!({ "id": "rec-001", "title": "Blue Train" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_without_content_type_is_bad_request() {
    let router = test_router(vec![]);

    let request = Request::builder()
        .method("POST")
        .uri("/albums")
        .body(Body::from(
            serde_json::to_vec(&sample_album()).unwrap(),
        ))
        .unwrap();
    let (status, _) = send(router, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// =============================================================================
// Update
// =============================================================================

#[tokio::test]
async fn test_update_changes_only_named_fields() {
    let router = test_router(vec![sample_album()]);

    let (status, body) = send_json(
        router.clone(),
        "PUT",
        "/albums/rec-001",
        json!({ "price": 10.0 }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "album updated successfully");

    let (_, body) = send_empty(router, "GET", "/albums/rec-001").await;
    assert_eq!(body["data"]["title"], "Blue Train");
    assert_eq!(body["data"]["artist"], "John Coltrane");
    assert_eq!(body["data"]["price"], 10.0);
}

#[tokio::test]
async fn test_update_missing_album_is_bad_request() {
    let router = test_router(vec![]);

    let (status, body) =
        send_json(router, "PUT", "/albums/nope", json!({ "title": "x" })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("not found"));
}

#[tokio::test]
async fn test_update_with_malformed_json_is_bad_request() {
    let router = test_router(vec![sample_album()]);

    let (status, _) = send_raw(router, "PUT", "/albums/rec-001", "{not json").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// =============================================================================
// Delete
// =============================================================================

#[tokio::test]
async fn test_delete_then_fetch_fails() {
    let router = test_router(vec![sample_album()]);

    let (status, body) = send_empty(router.clone(), "DELETE", "/albums/rec-001").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "album deleted successfully");

    let (status, _) = send_empty(router, "GET", "/albums/rec-001").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_delete_missing_album_is_internal_error() {
    let router = test_router(vec![]);

    let (status, body) = send_empty(router, "DELETE", "/albums/nope").await;

    // The pre-delete lookup fails, which the API reports as a fetch error.
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().contains("not found"));
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn test_health_reports_ok() {
    let router = test_router(vec![]);

    let (status, body) = send_empty(router, "GET", "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}
