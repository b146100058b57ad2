//! Presentational components for the admin pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components receive already-derived data (chart slices, the upcoming event)
//! or read the dashboard state from context; none of them fetch on their own.

pub mod donut_chart;
pub mod event_overview;
pub mod loading;
pub mod upcoming_event;
