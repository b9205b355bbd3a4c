//! Integration tests for the strict JSON extractor, envelopes and remote
//! pushes.

mod common;

use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderMap, Request, StatusCode},
    routing::post,
    Json, Router,
};
use common::test_app;
use http_toolkit::{RemoteError, Toolkit, ToolkitConfig};
use serde_json::{json, Value};
use tower::ServiceExt;

/// Sends a raw body and returns the status with the decoded JSON response.
async fn raw_request(router: &Router, uri: &str, body: &'static str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap();

    let response = router.clone().oneshot(request).await.unwrap();

    let status = response.status();
    assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, serde_json::from_slice(&bytes).unwrap())
}

/// Local endpoint that echoes the request content type and body.
async fn spawn_echo_server() -> String {
    async fn echo(headers: HeaderMap, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
        let content_type = headers
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        (
            StatusCode::ACCEPTED,
            Json(json!({"contentType": content_type, "received": body})),
        )
    }

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, Router::new().route("/hook", post(echo)))
            .await
            .unwrap();
    });

    format!("http://{}/hook", addr)
}

#[tokio::test]
async fn test_slug_endpoint_returns_envelope() {
    let (router, _dir) = test_app(ToolkitConfig::default());

    let (status, body) = raw_request(&router, "/api/v1/slugs", r#"{"text": "Hello World!"}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"error": false, "message": "slug created", "data": {"slug": "hello-world"}})
    );
}

#[tokio::test]
async fn test_slug_endpoint_rejects_unsluggable_text() {
    let (router, _dir) = test_app(ToolkitConfig::default());

    let (status, body) = raw_request(&router, "/api/v1/slugs", r#"{"text": "こんにちは世界"}"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], true);
    assert_eq!(body["message"], "invalid input, the slug is empty");
}

#[tokio::test]
async fn test_strict_json_rejects_unknown_field() {
    let (router, _dir) = test_app(ToolkitConfig::default());

    let (status, body) = raw_request(
        &router,
        "/api/v1/slugs",
        r#"{"text": "Hello", "extra": 1}"#,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], r#"body contains unknown field "extra""#);
}

#[tokio::test]
async fn test_strict_json_allows_unknown_field_when_configured() {
    let (router, _dir) = test_app(ToolkitConfig {
        allow_unknown_fields: true,
        ..Default::default()
    });

    let (status, body) = raw_request(
        &router,
        "/api/v1/slugs",
        r#"{"text": "Hello", "extra": 1}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["slug"], "hello");
}

#[tokio::test]
async fn test_strict_json_rejects_multiple_objects() {
    let (router, _dir) = test_app(ToolkitConfig::default());

    let (status, body) = raw_request(
        &router,
        "/api/v1/slugs",
        r#"{"text": "one"}{"text": "two"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "body must contain only one JSON object");
}

#[tokio::test]
async fn test_strict_json_rejects_empty_body() {
    let (router, _dir) = test_app(ToolkitConfig::default());

    let (status, body) = raw_request(&router, "/api/v1/slugs", "").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "body must not be empty");
}

#[tokio::test]
async fn test_strict_json_enforces_size_limit() {
    let (router, _dir) = test_app(ToolkitConfig {
        max_json_size: 8,
        ..Default::default()
    });

    let (status, body) = raw_request(&router, "/api/v1/slugs", r#"{"text": "Hello World!"}"#).await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(body["message"], "body must not be larger than 8 bytes");
}

#[tokio::test]
async fn test_health_reports_effective_config() {
    let (router, _dir) = test_app(ToolkitConfig {
        max_file_size: 0,
        ..Default::default()
    });

    let request = Request::builder()
        .uri("/api/v1/health")
        .body(Body::empty())
        .unwrap();
    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["config"]["maxFileSize"], 1024 * 1024 * 1024);
}

#[tokio::test]
async fn test_push_json_to_remote_posts_json() {
    let uri = spawn_echo_server().await;
    let toolkit = Toolkit::default();

    let (response, status) = toolkit
        .push_json_to_remote(&uri, &json!({"event": "created", "id": 7}), None)
        .await
        .unwrap();

    assert_eq!(status, StatusCode::ACCEPTED);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["contentType"], "application/json");
    assert_eq!(body["received"], json!({"event": "created", "id": 7}));
}

#[tokio::test]
async fn test_push_json_to_remote_uses_supplied_client() {
    let uri = spawn_echo_server().await;
    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(5))
        .build()
        .unwrap();

    let (_, status) = Toolkit::default()
        .push_json_to_remote(&uri, &json!([1, 2, 3]), Some(&client))
        .await
        .unwrap();

    assert_eq!(status, StatusCode::ACCEPTED);
}

#[tokio::test]
async fn test_push_json_to_remote_reports_connection_failure() {
    // Bind and drop to find a port nothing is listening on.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = Toolkit::default()
        .push_json_to_remote(&format!("http://{}/hook", addr), &json!({}), None)
        .await
        .unwrap_err();

    assert!(matches!(err, RemoteError::Connection(_)));
}

#[tokio::test]
async fn test_webhook_endpoint_forwards_payload() {
    let uri = spawn_echo_server().await;
    let (router, _dir) = test_app(ToolkitConfig::default());

    let body = serde_json::to_vec(&json!({"uri": uri, "payload": {"ping": true}})).unwrap();
    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/webhooks")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["data"]["statusCode"], 202);
}

#[tokio::test]
async fn test_webhook_endpoint_refuses_unlisted_host() {
    let (router, _dir) = test_app(ToolkitConfig::default());

    let (status, body) = raw_request(
        &router,
        "/api/v1/webhooks",
        r#"{"uri": "http://169.254.169.254/latest/meta-data", "payload": {}}"#,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "host 169.254.169.254 is not allowed");
}

#[tokio::test]
async fn test_error_json_uses_custom_status() {
    async fn handler(State(toolkit): State<std::sync::Arc<Toolkit>>) -> axum::response::Response {
        toolkit
            .error_json("conflicting slug", Some(StatusCode::CONFLICT))
            .unwrap()
    }

    let router = Router::new()
        .route("/conflict", post(handler))
        .with_state(std::sync::Arc::new(Toolkit::default()));

    let (status, body) = raw_request(&router, "/conflict", "").await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body, json!({"error": true, "message": "conflicting slug"}));
}
