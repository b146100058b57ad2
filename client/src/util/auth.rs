//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The dashboard sends anonymous visitors to `/login`; the login page sends
//! signed-in admins to `/admin`. Both wait until `/api/auth/me` has answered.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

pub const LOGIN_PATH: &str = "/login";
pub const DASHBOARD_PATH: &str = "/admin";
pub const EMAIL_SENT_PATH: &str = "/emailsent";

pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && state.user.is_none()
}

pub fn should_redirect_authed(state: &AuthState) -> bool {
    !state.loading && state.user.is_some()
}

/// Redirect to `/login` whenever auth has loaded and no user is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate(LOGIN_PATH, NavigateOptions::default());
        }
    });
}

/// Redirect to `/admin` once a signed-in user is known.
pub fn install_authed_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_authed(&auth.get()) {
            navigate(DASHBOARD_PATH, NavigateOptions::default());
        }
    });
}
