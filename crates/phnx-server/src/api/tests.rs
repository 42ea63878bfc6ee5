//! Integration tests for the generation API.
//!
//! Tests use `tower::ServiceExt::oneshot()` to drive the axum router
//! in-process. Remote-URL behavior is exercised against one-shot TCP
//! stubs on the loopback interface; nothing leaves the host.

use std::net::SocketAddr;
use std::time::Duration;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    response::Response,
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tower::ServiceExt;

// ---------------------------------------------------------------------------
// Test harness
// ---------------------------------------------------------------------------

fn make_app() -> Router {
    super::create_router(reqwest::Client::new())
}

fn make_app_with(http: reqwest::Client) -> Router {
    super::create_router(http)
}

/// Serve one connection on the loopback interface with a canned HTTP/1.1
/// response, then hang up.
async fn spawn_stub(response: Vec<u8>) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind stub");
    let addr = listener.local_addr().expect("stub addr");
    tokio::spawn(async move {
        if let Ok((mut socket, _)) = listener.accept().await {
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;
            let _ = socket.write_all(&response).await;
        }
    });
    addr
}

/// Send one request through the router and return the status + JSON body.
async fn send_json(app: Router, body: Value) -> (StatusCode, Value) {
    let req = Request::builder()
        .method(Method::POST)
        .uri("/api/generate")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request build failed");
    send(app, req).await
}

async fn send(app: Router, req: Request<Body>) -> (StatusCode, Value) {
    let resp: Response = app.oneshot(req).await.expect("router returned error");
    let status = resp.status();
    let bytes = resp
        .into_body()
        .collect()
        .await
        .expect("body collect failed")
        .to_bytes();
    let body = serde_json::from_slice(&bytes).expect("response is not valid JSON");
    (status, body)
}

// ---------------------------------------------------------------------------
// POST /api/generate
// ---------------------------------------------------------------------------

#[tokio::test]
async fn generate_from_raw_spec() {
    let spec = r#"{"openapi":"3.0.0","info":{"title":"Pet Store"},"paths":{"/pets":{"get":{"operationId":"listPets"}}}}"#;
    let (status, body) = send_json(
        make_app(),
        json!({"inputMethod": "raw", "spec": spec}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["projectName"], "pet-store");

    let files = body["files"].as_object().expect("files object");
    for name in ["types.ts", "client.ts", "hooks.ts", "schemas.ts", "adapters.ts"] {
        assert!(files.contains_key(name), "missing {name}");
    }
    assert!(files["client.ts"]
        .as_str()
        .expect("client.ts content")
        .contains("async listPets"));
}

#[tokio::test]
async fn malformed_body_is_400() {
    let req = Request::builder()
        .method(Method::POST)
        .uri("/api/generate")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .expect("request build failed");
    let (status, body) = send(make_app(), req).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid JSON body.");
}

#[tokio::test]
async fn unknown_input_method_is_400() {
    let (status, body) = send_json(
        make_app(),
        json!({"inputMethod": "carrier-pigeon", "spec": "x"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid JSON body.");
}

#[tokio::test]
async fn empty_spec_is_400() {
    let (status, body) = send_json(
        make_app(),
        json!({"inputMethod": "raw", "spec": "   "}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Spec is empty.");
}

#[tokio::test]
async fn unparseable_spec_is_400_with_details() {
    let (status, body) = send_json(
        make_app(),
        json!({"inputMethod": "raw", "spec": "not json or yaml"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Spec could not be parsed as JSON or YAML.");
    assert!(body["details"].is_string());
}

#[tokio::test]
async fn spec_without_minimal_shape_is_400() {
    let (status, body) = send_json(
        make_app(),
        json!({"inputMethod": "raw", "spec": "{\"paths\": {}}"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "Spec does not look like OpenAPI (missing openapi/paths)."
    );
}

#[tokio::test]
async fn non_http_url_is_rejected_before_any_network_call() {
    let (status, body) = send_json(
        make_app(),
        json!({"inputMethod": "url", "url": "ftp://example.com/spec.yaml"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "URL must be http(s).");
}

#[tokio::test]
async fn oversized_raw_spec_is_400() {
    let oversized = "a".repeat(super::generate::MAX_SPEC_BYTES + 1);
    let (status, body) = send_json(
        make_app(),
        json!({"inputMethod": "raw", "spec": oversized}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Spec too large (max 5MB).");
}

// ---------------------------------------------------------------------------
// POST /api/generate, url input
// ---------------------------------------------------------------------------

#[tokio::test]
async fn remote_spec_generates() {
    let spec = r#"{"openapi":"3.0.0","info":{"title":"Remote"},"paths":{}}"#;
    let addr = spawn_stub(
        format!(
            "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: {}\r\n\r\n{spec}",
            spec.len()
        )
        .into_bytes(),
    )
    .await;

    let (status, body) = send_json(
        make_app(),
        json!({"inputMethod": "url", "url": format!("http://{addr}/spec.json")}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["projectName"], "remote");
}

#[tokio::test]
async fn oversized_remote_spec_is_413_from_content_length() {
    // The declared length alone triggers the cap; no body ever streams.
    let declared = super::generate::MAX_SPEC_BYTES + 1;
    let addr = spawn_stub(
        format!("HTTP/1.1 200 OK\r\ncontent-length: {declared}\r\n\r\n").into_bytes(),
    )
    .await;

    let (status, body) = send_json(
        make_app(),
        json!({"inputMethod": "url", "url": format!("http://{addr}/spec.json")}),
    )
    .await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(body["error"], "Spec too large (max 5MB).");
}

#[tokio::test]
async fn oversized_remote_spec_is_413_mid_stream() {
    // Chunked response with no content-length, so the cap must trip while
    // the body streams in.
    let mut response = b"HTTP/1.1 200 OK\r\ntransfer-encoding: chunked\r\n\r\n".to_vec();
    let chunk = vec![b'a'; 1024 * 1024];
    for _ in 0..6 {
        response.extend_from_slice(format!("{:x}\r\n", chunk.len()).as_bytes());
        response.extend_from_slice(&chunk);
        response.extend_from_slice(b"\r\n");
    }
    response.extend_from_slice(b"0\r\n\r\n");
    let addr = spawn_stub(response).await;

    let (status, body) = send_json(
        make_app(),
        json!({"inputMethod": "url", "url": format!("http://{addr}/spec.json")}),
    )
    .await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(body["error"], "Spec too large (max 5MB).");
}

#[tokio::test]
async fn unreachable_url_is_400() {
    // Bind then drop to get a port with nothing listening.
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let (status, body) = send_json(
        make_app(),
        json!({"inputMethod": "url", "url": format!("http://{addr}/spec.json")}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Failed to fetch URL.");
}

#[tokio::test]
async fn stalled_remote_fetch_times_out_as_400() {
    // Accept the connection and never respond; the client timeout must
    // turn the stall into a fetch failure.
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind stub");
    let addr = listener.local_addr().expect("stub addr");
    tokio::spawn(async move {
        if let Ok((socket, _)) = listener.accept().await {
            tokio::time::sleep(Duration::from_secs(5)).await;
            drop(socket);
        }
    });

    let http = reqwest::Client::builder()
        .timeout(Duration::from_millis(250))
        .build()
        .expect("client");
    let (status, body) = send_json(
        make_app_with(http),
        json!({"inputMethod": "url", "url": format!("http://{addr}/spec.json")}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Failed to fetch URL.");
}

#[test]
fn default_http_client_builds() {
    assert!(super::build_http_client().is_ok());
}

// ---------------------------------------------------------------------------
// GET /health
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_reports_healthy() {
    let req = Request::builder()
        .method(Method::GET)
        .uri("/health")
        .body(Body::empty())
        .expect("request build failed");
    let (status, body) = send(make_app(), req).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

// ---------------------------------------------------------------------------
// URL scheme check (unit level)
// ---------------------------------------------------------------------------

#[test]
fn scheme_check_accepts_http_and_https() {
    assert!(super::generate::check_url_scheme("http://example.com/a.yaml").is_ok());
    assert!(super::generate::check_url_scheme("https://example.com/a.yaml").is_ok());
}

#[test]
fn scheme_check_rejects_everything_else() {
    assert!(super::generate::check_url_scheme("ftp://example.com/a.yaml").is_err());
    assert!(super::generate::check_url_scheme("file:///etc/passwd").is_err());
    assert!(super::generate::check_url_scheme("not a url").is_err());
}
