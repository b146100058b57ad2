//! Per-category check-in aggregation for the admin dashboard.
//!
//! SYSTEM CONTEXT
//! ==============
//! The dashboard groups check-ins either by event type ("All Events") or by
//! hack-night location ("Hacknight Only"), optionally restricted to one
//! location. Each category reports how many volunteers signed in, how many
//! volunteer hours that represents, and the average hours per volunteer.
//!
//! INVARIANTS
//! ==========
//! - Every category label of the selected kind is present, seeded with zero.
//! - Under `ChartKind::AllEvents` with `LocationFilter::All`, volunteer counts
//!   sum to the number of check-ins whose event is known.
//! - Check-ins for unknown events are never attributed to a category.

#[cfg(test)]
#[path = "aggregate_test.rs"]
mod aggregate_test;

use std::collections::{BTreeMap, BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use crate::model::{CheckIn, Event, normalize_event, title_case};

/// Location label used for events without a hack-night tag in the roster.
pub const UNASSIGNED_LOCATION: &str = "Unassigned";

/// Value of the location selector that disables location filtering.
pub const ALL_LOCATIONS: &str = "All";

/// Normalized events keyed by id, plus the unique category labels.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EventCatalog {
    events: HashMap<String, Event>,
    event_types: BTreeSet<String>,
    locations: BTreeSet<String>,
}

impl EventCatalog {
    #[must_use]
    pub fn from_events(events: Vec<Event>) -> Self {
        let mut catalog = Self::default();
        for event in events {
            let event = normalize_event(event);
            catalog.event_types.insert(event.kind().to_owned());
            if let Some(location) = event.location() {
                catalog.locations.insert(location.to_owned());
            }
            catalog.events.insert(event.id.clone(), event);
        }
        catalog
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Event> {
        self.events.get(id)
    }

    #[must_use]
    pub fn event_types(&self) -> &BTreeSet<String> {
        &self.event_types
    }

    #[must_use]
    pub fn locations(&self) -> &BTreeSet<String> {
        &self.locations
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Category labels for a chart kind.
    #[must_use]
    pub fn categories(&self, kind: ChartKind) -> &BTreeSet<String> {
        match kind {
            ChartKind::AllEvents => &self.event_types,
            ChartKind::HacknightOnly => &self.locations,
        }
    }
}

/// How check-ins are grouped into chart categories.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartKind {
    /// Group by event type.
    #[default]
    AllEvents,
    /// Group by hack-night location; events without a location are skipped.
    HacknightOnly,
}

impl ChartKind {
    pub const ALL: [Self; 2] = [Self::AllEvents, Self::HacknightOnly];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::AllEvents => "All Events",
            Self::HacknightOnly => "Hacknight Only",
        }
    }

    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.label() == label)
    }

    fn category_of(self, event: &Event) -> Option<&str> {
        match self {
            Self::AllEvents => Some(event.kind()),
            Self::HacknightOnly => event.location(),
        }
    }
}

/// Restricts which events contribute to the charts.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LocationFilter {
    #[default]
    All,
    Location(String),
}

impl LocationFilter {
    /// Parse a selector value; `"All"` and the empty string mean no filter.
    /// Other values are title-cased to match catalog labels.
    #[must_use]
    pub fn from_value(value: &str) -> Self {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(ALL_LOCATIONS) {
            Self::All
        } else {
            Self::Location(title_case(trimmed))
        }
    }

    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::All => ALL_LOCATIONS,
            Self::Location(location) => location,
        }
    }

    #[must_use]
    pub fn allows(&self, event: &Event) -> bool {
        match self {
            Self::All => true,
            Self::Location(location) => event.location() == Some(location.as_str()),
        }
    }
}

/// Group check-ins by the event they reference.
#[must_use]
pub fn group_by_event(check_ins: &[CheckIn]) -> HashMap<&str, Vec<&CheckIn>> {
    let mut grouped: HashMap<&str, Vec<&CheckIn>> = HashMap::new();
    for check_in in check_ins {
        grouped.entry(check_in.event_id.as_str()).or_default().push(check_in);
    }
    grouped
}

/// Signed-in counts and volunteer hours per category.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct CategoryTotals {
    pub volunteers: BTreeMap<String, u64>,
    pub hours: BTreeMap<String, f64>,
}

impl CategoryTotals {
    /// Average hours per signed-in volunteer for each category.
    #[must_use]
    pub fn average_hours(&self) -> BTreeMap<String, Option<f64>> {
        self.volunteers
            .iter()
            .map(|(label, count)| {
                let hours = self.hours.get(label).copied().unwrap_or(0.0);
                (label.clone(), average_hours(hours, *count))
            })
            .collect()
    }

    #[must_use]
    pub fn total_volunteers(&self) -> u64 {
        self.volunteers.values().sum()
    }

    #[must_use]
    pub fn total_hours(&self) -> f64 {
        self.hours.values().sum()
    }

    /// Hours per volunteer across every category, not a sum of averages.
    #[must_use]
    pub fn overall_average_hours(&self) -> Option<f64> {
        average_hours(self.total_hours(), self.total_volunteers())
    }

    /// Slices for the three dashboard donuts.
    #[must_use]
    pub fn chart_data(&self) -> ChartData {
        let volunteers = self
            .volunteers
            .iter()
            .map(|(label, count)| ChartSlice::new(label, count_as_f64(*count)))
            .collect();
        let hours = self.hours.iter().map(|(label, hours)| ChartSlice::new(label, *hours)).collect();
        let average_hours = self
            .average_hours()
            .into_iter()
            .filter_map(|(label, average)| average.map(|value| ChartSlice::new(&label, value)))
            .collect();
        ChartData { volunteers, hours, average_hours }
    }
}

/// Sum check-ins and volunteer hours per category of `kind`.
#[must_use]
pub fn category_totals(
    catalog: &EventCatalog,
    grouped: &HashMap<&str, Vec<&CheckIn>>,
    kind: ChartKind,
    filter: &LocationFilter,
) -> CategoryTotals {
    let mut totals = CategoryTotals::default();
    let seeded = catalog.categories(kind).iter().filter(|label| match (kind, filter) {
        (ChartKind::HacknightOnly, LocationFilter::Location(location)) => *label == location,
        _ => true,
    });
    for label in seeded {
        totals.volunteers.insert(label.clone(), 0);
        totals.hours.insert(label.clone(), 0.0);
    }

    for (event_id, check_ins) in grouped {
        let Some(event) = catalog.get(event_id) else {
            continue;
        };
        if !filter.allows(event) {
            continue;
        }
        let Some(label) = kind.category_of(event) else {
            continue;
        };
        let count = check_ins.len() as u64;
        *totals.volunteers.entry(label.to_owned()).or_insert(0) += count;
        *totals.hours.entry(label.to_owned()).or_insert(0.0) += event.duration_hours() * count_as_f64(count);
    }
    totals
}

/// `hours / count` rounded to two decimals; `None` when nobody signed in.
#[must_use]
pub fn average_hours(hours: f64, count: u64) -> Option<f64> {
    if count == 0 {
        return None;
    }
    Some(round2(hours / count_as_f64(count)))
}

#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[allow(clippy::cast_precision_loss)]
fn count_as_f64(count: u64) -> f64 {
    count as f64
}

/// One labelled value in a donut chart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartSlice {
    pub label: String,
    pub value: f64,
}

impl ChartSlice {
    #[must_use]
    pub fn new(label: &str, value: f64) -> Self {
        Self { label: label.to_owned(), value }
    }
}

/// Data for the three dashboard charts.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub volunteers: Vec<ChartSlice>,
    pub hours: Vec<ChartSlice>,
    pub average_hours: Vec<ChartSlice>,
}

/// Distinct volunteers and total check-ins per location.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct LocationRoster {
    pub unique_volunteers: BTreeMap<String, BTreeSet<String>>,
    pub check_ins: BTreeMap<String, u64>,
}

impl LocationRoster {
    /// Distinct volunteers for a selection; `All` counts each person once.
    #[must_use]
    pub fn volunteer_count(&self, filter: &LocationFilter) -> usize {
        match filter {
            LocationFilter::All => self
                .unique_volunteers
                .values()
                .flatten()
                .collect::<BTreeSet<_>>()
                .len(),
            LocationFilter::Location(location) => self.unique_volunteers.get(location).map_or(0, BTreeSet::len),
        }
    }

    #[must_use]
    pub fn check_in_count(&self, filter: &LocationFilter) -> u64 {
        match filter {
            LocationFilter::All => self.check_ins.values().sum(),
            LocationFilter::Location(location) => self.check_ins.get(location).copied().unwrap_or(0),
        }
    }
}

/// Build the per-location roster; untagged events land in [`UNASSIGNED_LOCATION`].
#[must_use]
pub fn location_roster(catalog: &EventCatalog, check_ins: &[CheckIn]) -> LocationRoster {
    let mut roster = LocationRoster::default();
    for location in catalog.locations() {
        roster.unique_volunteers.insert(location.clone(), BTreeSet::new());
        roster.check_ins.insert(location.clone(), 0);
    }

    for check_in in check_ins {
        let Some(event) = catalog.get(&check_in.event_id) else {
            continue;
        };
        let location = event.location().unwrap_or(UNASSIGNED_LOCATION).to_owned();
        roster
            .unique_volunteers
            .entry(location.clone())
            .or_default()
            .insert(check_in.user_id.clone());
        *roster.check_ins.entry(location).or_insert(0) += 1;
    }
    roster
}

/// Catalog plus raw check-ins, the input to every dashboard view.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardStats {
    catalog: EventCatalog,
    check_ins: Vec<CheckIn>,
}

impl DashboardStats {
    #[must_use]
    pub fn new(events: Vec<Event>, check_ins: Vec<CheckIn>) -> Self {
        Self { catalog: EventCatalog::from_events(events), check_ins }
    }

    #[must_use]
    pub fn catalog(&self) -> &EventCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn totals(&self, kind: ChartKind, filter: &LocationFilter) -> CategoryTotals {
        let grouped = group_by_event(&self.check_ins);
        category_totals(&self.catalog, &grouped, kind, filter)
    }

    #[must_use]
    pub fn charts(&self, kind: ChartKind, filter: &LocationFilter) -> ChartData {
        self.totals(kind, filter).chart_data()
    }

    #[must_use]
    pub fn total_check_ins(&self) -> usize {
        self.check_ins.len()
    }

    /// Check-ins that reference an event missing from the catalog.
    #[must_use]
    pub fn unmatched_check_ins(&self) -> usize {
        self.check_ins
            .iter()
            .filter(|check_in| self.catalog.get(&check_in.event_id).is_none())
            .count()
    }

    #[must_use]
    pub fn roster(&self) -> LocationRoster {
        location_roster(&self.catalog, &self.check_ins)
    }
}
