//! Admin dashboard state: loaded records, selections and derived chart data.
//!
//! SYSTEM CONTEXT
//! ==============
//! Check-ins/events and users are fetched independently on mount and may
//! resolve in any order; each fetch writes only its own fields. Chart data is
//! recomputed from `stats` on every read rather than cached.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use checkins::{ChartData, ChartKind, DashboardStats, LocationFilter, display_date, next_event};

use crate::net::types::{CheckIn, Event, UserRecord};

/// Figures printed in the middle of each donut; `None` leaves it blank.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ChartCenters {
    pub volunteers: Option<f64>,
    pub hours: Option<f64>,
    pub average_hours: Option<f64>,
}

/// Summary of the upcoming event shown at the top of the dashboard.
#[derive(Clone, Debug, PartialEq)]
pub struct UpcomingEvent {
    pub id: String,
    pub name: String,
    pub when: String,
    pub kind: String,
    pub location: Option<String>,
}

impl UpcomingEvent {
    #[must_use]
    pub fn from_event(event: &Event) -> Self {
        Self {
            id: event.id.clone(),
            name: event.name.clone().unwrap_or_else(|| event.kind().to_owned()),
            when: display_date(event),
            kind: checkins::title_case(event.kind()),
            location: event.location().map(checkins::title_case),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct DashboardState {
    pub loading: bool,
    pub stats: Option<DashboardStats>,
    pub next_event: Option<UpcomingEvent>,
    pub check_in_ready: bool,
    pub toggle_pending: bool,
    pub volunteer_count: Option<usize>,
    pub chart_kind: ChartKind,
    pub location: LocationFilter,
    pub error: Option<String>,
}

impl DashboardState {
    #[must_use]
    pub fn loading() -> Self {
        Self { loading: true, ..Self::default() }
    }

    /// Store a fresh events/check-ins snapshot and pick the next event.
    pub fn apply_loaded(&mut self, events: Vec<Event>, check_ins: Vec<CheckIn>) {
        if let Some(event) = next_event(&events) {
            self.check_in_ready = event.check_in_ready;
            self.next_event = Some(UpcomingEvent::from_event(event));
        } else {
            self.check_in_ready = false;
            self.next_event = None;
        }
        let stats = DashboardStats::new(events, check_ins);
        if let LocationFilter::Location(location) = &self.location {
            if !stats.catalog().locations().contains(location) {
                self.location = LocationFilter::All;
            }
        }
        self.stats = Some(stats);
        self.loading = false;
        self.error = None;
    }

    pub fn apply_load_error(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    pub fn apply_users(&mut self, users: &[UserRecord]) {
        self.volunteer_count = Some(users.len());
    }

    /// Chart slices for the current kind and location selection.
    #[must_use]
    pub fn charts(&self) -> ChartData {
        self.stats
            .as_ref()
            .map(|stats| stats.charts(self.chart_kind, &self.location))
            .unwrap_or_default()
    }

    /// Totals for the current selection. The average is total hours over
    /// total volunteers, never a sum of per-category averages.
    #[must_use]
    pub fn chart_centers(&self) -> ChartCenters {
        let Some(stats) = &self.stats else {
            return ChartCenters::default();
        };
        let totals = stats.totals(self.chart_kind, &self.location);
        #[allow(clippy::cast_precision_loss)]
        let volunteers = totals.total_volunteers() as f64;
        ChartCenters {
            volunteers: Some(volunteers),
            hours: Some(checkins::aggregate::round2(totals.total_hours())),
            average_hours: totals.overall_average_hours(),
        }
    }

    /// Registered volunteer count, `"-"` until the user list arrives.
    #[must_use]
    pub fn registered_volunteers_label(&self) -> String {
        self.volunteer_count.map_or_else(|| "-".to_owned(), |count| count.to_string())
    }

    /// Values for the location selector, `"All"` first.
    #[must_use]
    pub fn location_options(&self) -> Vec<String> {
        let mut options = vec![LocationFilter::All.value().to_owned()];
        if let Some(stats) = &self.stats {
            options.extend(stats.catalog().locations().iter().cloned());
        }
        options
    }

    pub fn select_location(&mut self, value: &str) {
        self.location = LocationFilter::from_value(value);
    }

    pub fn select_chart_kind(&mut self, kind: ChartKind) {
        self.chart_kind = kind;
    }

    #[must_use]
    pub fn total_check_ins(&self) -> usize {
        self.stats.as_ref().map_or(0, DashboardStats::total_check_ins)
    }

    /// Distinct volunteers who checked in under the current location selection.
    #[must_use]
    pub fn distinct_volunteers(&self) -> usize {
        self.stats
            .as_ref()
            .map_or(0, |stats| stats.roster().volunteer_count(&self.location))
    }

    /// Event id to `PATCH`, or `None` while a toggle is already in flight.
    pub fn begin_check_in_toggle(&mut self) -> Option<String> {
        if self.toggle_pending {
            return None;
        }
        let id = self.next_event.as_ref()?.id.clone();
        self.toggle_pending = true;
        Some(id)
    }

    /// Flip the readiness flag only when the server accepted the toggle.
    pub fn finish_check_in_toggle(&mut self, accepted: bool) {
        self.toggle_pending = false;
        if accepted {
            self.check_in_ready = !self.check_in_ready;
        }
    }
}
