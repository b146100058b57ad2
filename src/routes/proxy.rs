//! Forwarding of `/api/*` requests to the upstream check-in API.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser only talks to this host. Every `/api/...` request is replayed
//! against `CHECKIN_API_URL` with the same method, query, headers and body.
//! The configured custom request header is added when the caller did not send
//! one, so server-rendered and CLI callers need not know its value.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::Json;
use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use checkins::endpoints::{CUSTOM_REQUEST_HEADER, join_url};

use crate::state::AppState;

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),
    #[error("invalid custom request header value")]
    InvalidHeader(#[from] axum::http::header::InvalidHeaderValue),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "api proxy failed");
        (StatusCode::BAD_GATEWAY, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}

/// Headers that describe a single hop and must not be replayed.
pub(crate) fn is_hop_by_hop(name: &HeaderName) -> bool {
    [header::HOST, header::CONNECTION, header::CONTENT_LENGTH, header::TRANSFER_ENCODING, header::UPGRADE]
        .contains(name)
}

/// Copy end-to-end headers and add the custom header unless already present.
pub(crate) fn forward_headers(incoming: &HeaderMap, custom_header: Option<&str>) -> Result<HeaderMap, ProxyError> {
    let mut headers = HeaderMap::with_capacity(incoming.len() + 1);
    for (name, value) in incoming {
        if !is_hop_by_hop(name) {
            headers.append(name.clone(), value.clone());
        }
    }
    if let Some(value) = custom_header {
        if !headers.contains_key(CUSTOM_REQUEST_HEADER) {
            headers.insert(HeaderName::from_static(CUSTOM_REQUEST_HEADER), HeaderValue::from_str(value)?);
        }
    }
    Ok(headers)
}

/// Upstream URL for an incoming request path and query.
pub(crate) fn upstream_url(api_url: &str, uri: &Uri) -> String {
    let path_and_query = uri.path_and_query().map_or(uri.path(), |pq| pq.as_str());
    join_url(api_url, path_and_query)
}

/// `ANY /api/{*path}`.
pub async fn forward(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let url = upstream_url(&state.config.api_url, &uri);
    let headers = forward_headers(&headers, state.config.custom_header.as_deref())?;
    tracing::debug!(%method, %url, "proxying api request");

    let upstream = state.http.request(method, &url).headers(headers).body(body).send().await?;

    let status = upstream.status();
    let mut response_headers = HeaderMap::with_capacity(upstream.headers().len());
    for (name, value) in upstream.headers() {
        if !is_hop_by_hop(name) {
            response_headers.append(name.clone(), value.clone());
        }
    }
    let bytes = upstream.bytes().await?;

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    *response.headers_mut() = response_headers;
    Ok(response)
}
