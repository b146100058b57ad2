//! Check-in domain models and dashboard aggregation.
//!
//! This crate is UI-framework agnostic so the Leptos client and the CLI can
//! share one definition of how events and check-ins become chart data.

pub mod access;
pub mod aggregate;
pub mod endpoints;
pub mod model;
pub mod schedule;

pub use access::{AccessDecision, CheckUserResponse, EmailError, validate_admin_email};
pub use aggregate::{
    CategoryTotals, ChartData, ChartKind, ChartSlice, DashboardStats, EventCatalog, LocationFilter, LocationRoster,
    average_hours, category_totals, group_by_event, location_roster,
};
pub use model::{CheckIn, DEFAULT_EVENT_HOURS, DEFAULT_EVENT_TYPE, Event, UserRecord, normalize_event, title_case};
pub use schedule::{display_date, next_event};
