//! Admin email validation and access decisions for the login flow.
//!
//! The check endpoint answers `false` for unknown emails and a user record
//! otherwise; only records with `accessLevel == "admin"` may request a
//! sign-in email.

#[cfg(test)]
#[path = "access_test.rs"]
mod access_test;

use serde::{Deserialize, Serialize};

use crate::model::UserRecord;

pub const ADMIN_ACCESS_LEVEL: &str = "admin";

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EmailError {
    #[error("Please don't leave the field blank.")]
    Blank,
    #[error("Please format the email address correctly.")]
    Malformed,
}

/// Trim and sanity-check an email before it is sent to the check endpoint.
///
/// # Errors
///
/// Returns [`EmailError::Blank`] for empty input and [`EmailError::Malformed`]
/// when the address lacks an `@` or a `.`.
pub fn validate_admin_email(raw: &str) -> Result<String, EmailError> {
    let email = raw.trim();
    if email.is_empty() {
        return Err(EmailError::Blank);
    }
    if !email.contains('@') || !email.contains('.') {
        return Err(EmailError::Malformed);
    }
    Ok(email.to_owned())
}

/// Body of `POST /api/checkuser`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CheckUserResponse {
    Missing(bool),
    Found(UserRecord),
}

/// Outcome of the access check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AccessDecision {
    UnknownEmail,
    InsufficientAccess,
    Admin { email: String },
}

impl AccessDecision {
    #[must_use]
    pub fn from_response(response: CheckUserResponse, submitted_email: &str) -> Self {
        match response {
            CheckUserResponse::Missing(_) => Self::UnknownEmail,
            CheckUserResponse::Found(user) => {
                if user.access_level.as_deref() != Some(ADMIN_ACCESS_LEVEL) {
                    return Self::InsufficientAccess;
                }
                let email = user
                    .email
                    .filter(|email| !email.trim().is_empty())
                    .unwrap_or_else(|| submitted_email.to_owned());
                Self::Admin { email }
            }
        }
    }

    /// Message shown on the login page, `None` for admins.
    #[must_use]
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Self::UnknownEmail => Some("Please enter the correct email address."),
            Self::InsufficientAccess => Some("You don't have the correct access level to view the dashboard."),
            Self::Admin { .. } => None,
        }
    }
}
