use std::net::SocketAddr;

use axum::Router;
use axum::routing::{get, patch};

use super::*;
use crate::config::{ApiTimeouts, ServerConfig};

fn config(api_url: String, custom_header: Option<&str>) -> ServerConfig {
    ServerConfig {
        port: 0,
        api_url,
        custom_header: custom_header.map(str::to_owned),
        timeouts: ApiTimeouts { request_secs: 5, connect_secs: 2 },
    }
}

async fn serve(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

/// Upstream that echoes what it received.
fn upstream() -> Router {
    Router::new()
        .route(
            "/api/users",
            get(|headers: HeaderMap, uri: Uri| async move {
                let custom = headers
                    .get(CUSTOM_REQUEST_HEADER)
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or_default()
                    .to_owned();
                Json(serde_json::json!({ "header": custom, "query": uri.query() }))
            }),
        )
        .route(
            "/api/auth/verify",
            get(|| async {
                (
                    StatusCode::FOUND,
                    [(header::LOCATION, "/api/landing"), (header::SET_COOKIE, "token=abc; Path=/")],
                )
            }),
        )
        .route("/api/landing", get(|| async { "landed" }))
        .route(
            "/api/events/{id}",
            patch(|body: Bytes| async move { (StatusCode::ACCEPTED, body) }),
        )
}

async fn proxy_for(upstream_addr: SocketAddr, custom_header: Option<&str>) -> SocketAddr {
    let state = AppState::new(config(format!("http://{upstream_addr}"), custom_header)).unwrap();
    serve(crate::routes::api_routes(state)).await
}

#[tokio::test]
async fn injects_custom_header_and_keeps_query() {
    let upstream_addr = serve(upstream()).await;
    let proxy_addr = proxy_for(upstream_addr, Some("s3cret")).await;

    let body: serde_json::Value = reqwest::get(format!("http://{proxy_addr}/api/users?active=1"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["header"], "s3cret");
    assert_eq!(body["query"], "active=1");
}

#[tokio::test]
async fn caller_header_wins_over_configured_value() {
    let upstream_addr = serve(upstream()).await;
    let proxy_addr = proxy_for(upstream_addr, Some("s3cret")).await;

    let body: serde_json::Value = reqwest::Client::new()
        .get(format!("http://{proxy_addr}/api/users"))
        .header(CUSTOM_REQUEST_HEADER, "from-caller")
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["header"], "from-caller");
}

#[tokio::test]
async fn forwards_method_body_and_status() {
    let upstream_addr = serve(upstream()).await;
    let proxy_addr = proxy_for(upstream_addr, None).await;

    let resp = reqwest::Client::new()
        .patch(format!("http://{proxy_addr}/api/events/e1"))
        .body("{\"checkInReady\":true}")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 202);
    assert_eq!(resp.text().await.unwrap(), "{\"checkInReady\":true}");
}

#[tokio::test]
async fn redirects_reach_the_caller_with_cookies() {
    let upstream_addr = serve(upstream()).await;
    let proxy_addr = proxy_for(upstream_addr, None).await;

    let client = reqwest::Client::builder().redirect(reqwest::redirect::Policy::none()).build().unwrap();
    let resp = client.get(format!("http://{proxy_addr}/api/auth/verify")).send().await.unwrap();
    assert_eq!(resp.status().as_u16(), 302);
    assert_eq!(resp.headers()[header::LOCATION], "/api/landing");
    assert_eq!(resp.headers()[header::SET_COOKIE], "token=abc; Path=/");
}

#[tokio::test]
async fn upstream_status_passes_through() {
    let upstream_addr = serve(upstream()).await;
    let proxy_addr = proxy_for(upstream_addr, None).await;

    let resp = reqwest::get(format!("http://{proxy_addr}/api/missing")).await.unwrap();
    assert_eq!(resp.status().as_u16(), 404);
}

#[tokio::test]
async fn unreachable_upstream_is_bad_gateway() {
    let closed = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let closed_addr = closed.local_addr().unwrap();
    drop(closed);
    let proxy_addr = proxy_for(closed_addr, None).await;

    let resp = reqwest::get(format!("http://{proxy_addr}/api/checkins")).await.unwrap();
    assert_eq!(resp.status().as_u16(), 502);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().starts_with("upstream request failed"));
}

#[tokio::test]
async fn healthz_is_ok() {
    let upstream_addr = serve(upstream()).await;
    let proxy_addr = proxy_for(upstream_addr, None).await;

    let resp = reqwest::get(format!("http://{proxy_addr}/healthz")).await.unwrap();
    assert_eq!(resp.status().as_u16(), 200);
}

#[test]
fn forward_headers_drops_hop_by_hop() {
    let mut incoming = HeaderMap::new();
    incoming.insert(header::HOST, HeaderValue::from_static("localhost:3000"));
    incoming.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));

    let headers = forward_headers(&incoming, Some("v")).unwrap();
    assert!(!headers.contains_key(header::HOST));
    assert_eq!(headers[header::CONTENT_TYPE], "application/json");
    assert_eq!(headers[CUSTOM_REQUEST_HEADER], "v");
}

#[test]
fn forward_headers_rejects_unencodable_value() {
    assert!(forward_headers(&HeaderMap::new(), Some("bad\nvalue")).is_err());
}

#[test]
fn upstream_url_keeps_path_and_query() {
    let uri: Uri = "/api/checkins?limit=5".parse().unwrap();
    assert_eq!(upstream_url("http://up.test", &uri), "http://up.test/api/checkins?limit=5");
}
