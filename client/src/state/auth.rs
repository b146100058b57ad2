//! Auth-session state for the current admin.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards on the dashboard and login pages to coordinate
//! redirects and the signed-in identity shown in the header.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::UserRecord;

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<UserRecord>,
    pub loading: bool,
}

impl AuthState {
    /// State before `/api/auth/me` has answered.
    #[must_use]
    pub fn pending() -> Self {
        Self { user: None, loading: true }
    }

    pub fn resolve(&mut self, user: Option<UserRecord>) {
        self.user = user;
        self.loading = false;
    }

    #[must_use]
    pub fn display_name(&self) -> Option<String> {
        self.user.as_ref().map(UserRecord::display_name)
    }
}
