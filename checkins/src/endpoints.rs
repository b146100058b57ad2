//! REST paths and headers shared by the browser client, host and CLI.

#[cfg(test)]
#[path = "endpoints_test.rs"]
mod endpoints_test;

/// Header the check-in API requires on user and auth requests.
pub const CUSTOM_REQUEST_HEADER: &str = "x-customrequired-header";

pub const CHECK_INS: &str = "/api/checkins";
pub const EVENTS: &str = "/api/events";
pub const USERS: &str = "/api/users";
pub const CHECK_USER: &str = "/api/checkuser";
pub const SIGN_IN: &str = "/api/auth/signin";
pub const CURRENT_USER: &str = "/api/auth/me";

/// `PATCH` target that toggles an event's check-in readiness.
#[must_use]
pub fn event_path(event_id: &str) -> String {
    format!("{EVENTS}/{event_id}")
}

/// Join a base URL and an API path without doubling slashes.
#[must_use]
pub fn join_url(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path.trim_start_matches('/'))
}
