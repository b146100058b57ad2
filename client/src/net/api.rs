//! REST API helpers for communicating with the check-in API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so fetch failures
//! degrade to a loading reset or an error string without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(feature = "hydrate")]
use checkins::endpoints;

use super::types::{CheckIn, CheckUserResponse, Event, UserRecord};

/// Value for the custom request header, fixed when the bundle is built.
#[cfg(any(test, feature = "hydrate"))]
fn custom_header_value() -> &'static str {
    option_env!("CUSTOM_REQUEST_HEADER").unwrap_or_default()
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(what: &str, status: u16) -> String {
    format!("{what} request failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn is_sign_in_accepted(status: u16) -> bool {
    status == 200
}

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(url: &str, what: &str, with_header: bool) -> Result<T, String> {
    let mut request = gloo_net::http::Request::get(url).header("Content-Type", "application/json");
    if with_header {
        request = request.header(endpoints::CUSTOM_REQUEST_HEADER, custom_header_value());
    }
    let resp = request.send().await.map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(request_failed_message(what, resp.status()));
    }
    resp.json::<T>().await.map_err(|e| e.to_string())
}

/// Fetch the signed-in admin from `/api/auth/me`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user() -> Option<UserRecord> {
    #[cfg(feature = "hydrate")]
    {
        get_json::<UserRecord>(endpoints::CURRENT_USER, "current user", true).await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Fetch every check-in from `/api/checkins`.
///
/// # Errors
///
/// Returns an error string if the request fails or the body is not a check-in list.
pub async fn fetch_check_ins() -> Result<Vec<CheckIn>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json(endpoints::CHECK_INS, "check-ins", false).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Fetch every event from `/api/events`.
///
/// # Errors
///
/// Returns an error string if the request fails or the body is not an event list.
pub async fn fetch_events() -> Result<Vec<Event>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json(endpoints::EVENTS, "events", false).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Fetch registered users from `/api/users`.
///
/// # Errors
///
/// Returns an error string if the request fails or the body is not a user list.
pub async fn fetch_users() -> Result<Vec<UserRecord>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json(endpoints::USERS, "users", true).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Toggle check-in readiness via `PATCH /api/events/{id}`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds with a non-OK status.
pub async fn set_check_in_ready(event_id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let url = endpoints::event_path(event_id);
        let resp = gloo_net::http::Request::patch(&url)
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("check-in toggle", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = event_id;
        Err("not available on server".to_owned())
    }
}

/// Ask `POST /api/checkuser` whether `email` belongs to a registered user.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server responds with a non-OK status.
pub async fn check_user(email: &str) -> Result<CheckUserResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email });
        let resp = gloo_net::http::Request::post(endpoints::CHECK_USER)
            .header(endpoints::CUSTOM_REQUEST_HEADER, custom_header_value())
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("check user", resp.status()));
        }
        resp.json::<CheckUserResponse>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = email;
        Err("not available on server".to_owned())
    }
}

/// Request a sign-in email via `POST /api/auth/signin`.
///
/// # Errors
///
/// Returns an error string unless the server answers `200 OK`.
pub async fn request_sign_in(email: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email });
        let resp = gloo_net::http::Request::post(endpoints::SIGN_IN)
            .header(endpoints::CUSTOM_REQUEST_HEADER, custom_header_value())
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !is_sign_in_accepted(resp.status()) {
            return Err(request_failed_message("sign-in", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = email;
        Err("not available on server".to_owned())
    }
}
