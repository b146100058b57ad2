//! Upcoming-event selection and date display.

#[cfg(test)]
#[path = "schedule_test.rs"]
mod schedule_test;

use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;

use crate::model::Event;

/// Parse an event's `date` as RFC 3339.
#[must_use]
pub fn event_start(event: &Event) -> Option<OffsetDateTime> {
    let raw = event.date.as_deref()?;
    OffsetDateTime::parse(raw.trim(), &Rfc3339).ok()
}

/// The event with the latest start date. Ties go to the earliest entry.
#[must_use]
pub fn next_event(events: &[Event]) -> Option<&Event> {
    let mut best: Option<(&Event, OffsetDateTime)> = None;
    for event in events {
        let Some(start) = event_start(event) else {
            continue;
        };
        match best {
            Some((_, current)) if start <= current => {}
            _ => best = Some((event, start)),
        }
    }
    best.map(|(event, _)| event)
}

/// `YYYY-MM-DD HH:MM UTC`, or `"Date TBD"` when the date is missing or invalid.
#[must_use]
pub fn display_date(event: &Event) -> String {
    let Some(start) = event_start(event) else {
        return "Date TBD".to_owned();
    };
    let utc = start.to_offset(time::UtcOffset::UTC);
    utc.format(format_description!("[year]-[month]-[day] [hour]:[minute] UTC"))
        .unwrap_or_else(|_| "Date TBD".to_owned())
}
