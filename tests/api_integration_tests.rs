//! Integration Tests for API Endpoints
//!
//! Tests full request/response cycle for each endpoint against both backends.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use simple_cache::cache::SharedSegment;
use simple_cache::{api::create_router, AppState};
use std::thread::sleep;
use std::time::Duration;
use tower::ServiceExt;

// == Helper Functions ==

fn create_test_app() -> Router {
    create_router(AppState::local())
}

fn create_shared_app(segment: SharedSegment<Value>) -> Router {
    create_router(AppState::shared(segment, 60))
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    (status, body_to_json(response.into_body()).await)
}

// == Single-key Endpoints ==

#[tokio::test]
async fn test_set_and_get_round_trip() {
    let app = create_test_app();

    let (status, json) = send(
        &app,
        "PUT",
        "/set",
        Some(json!({"key": "user", "value": {"name": "alice", "roles": ["admin"]}})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);

    let (status, json) = send(&app, "GET", "/get/user", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["key"], "user");
    assert_eq!(json["value"], json!({"name": "alice", "roles": ["admin"]}));
}

#[tokio::test]
async fn test_get_missing_key_returns_null() {
    let app = create_test_app();

    let (status, json) = send(&app, "GET", "/get/missing", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(json["value"].is_null());
}

#[tokio::test]
async fn test_delete_endpoint() {
    let app = create_test_app();
    send(&app, "PUT", "/set", Some(json!({"key": "k", "value": 1}))).await;

    let (status, json) = send(&app, "DELETE", "/del/k", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);

    let (_, json) = send(&app, "GET", "/has/k", None).await;
    assert_eq!(json["exists"], false);

    // Deleting a missing key still succeeds
    let (_, json) = send(&app, "DELETE", "/del/k", None).await;
    assert_eq!(json["success"], true);
}

#[tokio::test]
async fn test_clear_endpoint() {
    let app = create_test_app();
    send(&app, "PUT", "/set", Some(json!({"key": "a", "value": 1}))).await;
    send(&app, "PUT", "/set", Some(json!({"key": "b", "value": 2}))).await;

    let (status, _) = send(&app, "DELETE", "/clear", None).await;
    assert_eq!(status, StatusCode::OK);

    for key in ["a", "b"] {
        let (_, json) = send(&app, "GET", &format!("/has/{}", key), None).await;
        assert_eq!(json["exists"], false);
    }
}

#[tokio::test]
async fn test_empty_key_request() {
    let app = create_test_app();

    let (status, json) = send(&app, "PUT", "/set", Some(json!({"key": "", "value": 1}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("empty"));
}

#[tokio::test]
async fn test_invalid_json_request() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri("/set")
                .header("content-type", "application/json")
                .body(Body::from("not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.status().is_client_error());
}

// == Bulk Endpoints ==

#[tokio::test]
async fn test_bulk_consistency() {
    let app = create_test_app();

    let (status, json) = send(
        &app,
        "PUT",
        "/set-multiple",
        Some(json!({"values": {"a": 1, "b": 2}})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);

    let (status, json) = send(
        &app,
        "POST",
        "/get-multiple",
        Some(json!({"keys": ["a", "b", "c"], "default": 0})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["values"], json!({"a": 1, "b": 2, "c": 0}));
}

#[tokio::test]
async fn test_get_multiple_not_iterable() {
    let app = create_test_app();

    let (status, json) = send(&app, "POST", "/get-multiple", Some(json!({"keys": "a"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("Invalid argument"));
}

#[tokio::test]
async fn test_set_multiple_requires_object() {
    let app = create_test_app();

    let (status, _) = send(&app, "PUT", "/set-multiple", Some(json!({"values": [1, 2]}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_multiple() {
    let app = create_test_app();
    send(
        &app,
        "PUT",
        "/set-multiple",
        Some(json!({"values": {"a": 1, "b": 2, "c": 3}})),
    )
    .await;

    let (status, json) = send(
        &app,
        "POST",
        "/delete-multiple",
        Some(json!({"keys": ["a", "c"]})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);

    let (_, json) = send(
        &app,
        "POST",
        "/get-multiple",
        Some(json!({"keys": ["a", "b", "c"]})),
    )
    .await;
    assert_eq!(json["values"], json!({"a": null, "b": 2, "c": null}));
}

// == Key Derivation ==

#[tokio::test]
async fn test_key_endpoint_flattens_arguments() {
    let app = create_test_app();

    let (_, nested) = send(&app, "POST", "/key", Some(json!({"args": [[1, [2, 3]], 4]}))).await;
    let (_, flat) = send(&app, "POST", "/key", Some(json!({"args": [1, 2, 3, 4]}))).await;

    assert_eq!(nested["key"], "1~2~3~4");
    assert_eq!(nested, flat);
}

// == Shared Backend ==

#[tokio::test]
async fn test_shared_backend_rejects_reserved_characters() {
    let segment = SharedSegment::new();
    let app = create_shared_app(segment.clone());

    let (status, json) = send(
        &app,
        "PUT",
        "/set",
        Some(json!({"key": "ns:key", "value": 1})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("':'"));
    assert!(segment.is_empty());
}

#[tokio::test]
async fn test_shared_backend_is_visible_across_apps() {
    let segment = SharedSegment::new();
    let first = create_shared_app(segment.clone());
    let second = create_shared_app(segment);

    send(&first, "PUT", "/set", Some(json!({"key": "k", "value": "v"}))).await;

    let (_, json) = send(&second, "GET", "/get/k", None).await;
    assert_eq!(json["value"], "v");
}

// == Stats and Health ==

#[tokio::test]
async fn test_stats_endpoint() {
    let app = create_test_app();
    send(&app, "PUT", "/set", Some(json!({"key": "k", "value": 1}))).await;
    send(&app, "GET", "/get/k", None).await;
    send(&app, "GET", "/get/missing", None).await;

    let (status, json) = send(&app, "GET", "/stats", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["backend"], "local");
    assert_eq!(json["hits"], 1);
    assert_eq!(json["misses"], 1);
    assert_eq!(json["hit_rate"], 0.5);
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_test_app();

    let (status, json) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert!(json.get("timestamp").is_some());
}

// == TTL ==

#[tokio::test]
async fn test_ttl_expiration_via_api() {
    let app = create_test_app();
    send(
        &app,
        "PUT",
        "/set",
        Some(json!({"key": "short", "value": "v", "ttl": 1})),
    )
    .await;

    let (_, json) = send(&app, "GET", "/get/short", None).await;
    assert_eq!(json["value"], "v");

    sleep(Duration::from_millis(1100));

    // Presence ignores expiry until a read purges the entry
    let (_, json) = send(&app, "GET", "/has/short", None).await;
    assert_eq!(json["exists"], true);

    let (_, json) = send(&app, "GET", "/get/short", None).await;
    assert!(json["value"].is_null());

    let (_, json) = send(&app, "GET", "/has/short", None).await;
    assert_eq!(json["exists"], false);
}
