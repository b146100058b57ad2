//! Wire models for events, check-ins and users.
//!
//! DESIGN
//! ======
//! Field names mirror the check-in API's JSON (`_id`, camelCase). Legacy
//! records omit `hours` and `eventType`; normalization fills those in once at
//! fetch time so aggregation never has to branch on missing data.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use serde::{Deserialize, Serialize};

/// Duration assumed for events recorded before `hours` existed.
pub const DEFAULT_EVENT_HOURS: f64 = 3.0;

/// Event type assumed for events recorded before `eventType` existed.
pub const DEFAULT_EVENT_TYPE: &str = "Hacknight";

/// A scheduled event volunteers can check in to.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Unique event identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Display name, if set.
    pub name: Option<String>,
    /// Start time as an RFC 3339 string.
    pub date: Option<String>,
    /// Duration in hours; `None` or zero on legacy records.
    pub hours: Option<f64>,
    /// Free-text event type (e.g. `"Workshop"`).
    pub event_type: Option<String>,
    /// Location tag for hack nights (e.g. `"Online"`, `"Westside"`).
    pub hacknight: Option<String>,
    /// Whether volunteers may currently check in.
    #[serde(default)]
    pub check_in_ready: bool,
}

impl Event {
    /// Duration in hours, falling back to [`DEFAULT_EVENT_HOURS`].
    #[must_use]
    pub fn duration_hours(&self) -> f64 {
        match self.hours {
            Some(hours) if hours != 0.0 && !hours.is_nan() => hours,
            _ => DEFAULT_EVENT_HOURS,
        }
    }

    /// Event type label, falling back to [`DEFAULT_EVENT_TYPE`].
    #[must_use]
    pub fn kind(&self) -> &str {
        self.event_type
            .as_deref()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or(DEFAULT_EVENT_TYPE)
    }

    /// Location tag, if the event carries a non-empty one.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.hacknight.as_deref().filter(|value| !value.trim().is_empty())
    }
}

/// A record linking a user to an event they attended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckIn {
    pub event_id: String,
    pub user_id: String,
    #[serde(default)]
    pub created_date: Option<String>,
}

/// Volunteer name as stored by the users endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserName {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

/// A registered user as returned by `/api/users`, `/api/checkuser` and `/api/auth/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub email: Option<String>,
    pub access_level: Option<String>,
    pub name: Option<UserName>,
}

impl UserRecord {
    /// Human-readable name, or the email when no name is stored.
    #[must_use]
    pub fn display_name(&self) -> String {
        if let Some(name) = &self.name {
            let full = format!("{} {}", name.first_name.trim(), name.last_name.trim());
            let full = full.trim();
            if !full.is_empty() {
                return full.to_owned();
            }
        }
        self.email.clone().unwrap_or_else(|| self.id.clone())
    }
}

/// Fill in legacy defaults and title-case the category labels.
#[must_use]
pub fn normalize_event(mut event: Event) -> Event {
    event.hours = Some(event.duration_hours());
    event.event_type = Some(title_case(event.kind()));
    event.hacknight = event.location().map(title_case);
    event
}

/// Lower-case `raw`, then upper-case each character that starts a word.
///
/// A word starts at the beginning of the string, after whitespace, or after
/// one of `" ' ( [ {`.
#[must_use]
pub fn title_case(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut at_boundary = true;
    for ch in raw.trim().chars() {
        if at_boundary && !is_word_boundary(ch) {
            out.extend(ch.to_uppercase());
            at_boundary = false;
        } else {
            out.extend(ch.to_lowercase());
        }
        if is_word_boundary(ch) {
            at_boundary = true;
        }
    }
    out
}

fn is_word_boundary(ch: char) -> bool {
    ch.is_whitespace() || matches!(ch, '"' | '\'' | '(' | '[' | '{')
}
