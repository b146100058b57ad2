use super::*;
use serde_json::json;

fn legacy_event(id: &str) -> Event {
    serde_json::from_value(json!({ "_id": id, "date": "2020-01-07T02:00:00.000Z" })).unwrap()
}

#[test]
fn event_deserializes_api_field_names() {
    let event: Event = serde_json::from_value(json!({
        "_id": "e1",
        "name": "Westside Hack Night",
        "date": "2021-03-02T02:00:00.000Z",
        "hours": 2,
        "eventType": "workshop",
        "hacknight": "westside",
        "checkInReady": true,
        "videoConferenceLink": "ignored"
    }))
    .unwrap();

    assert_eq!(event.id, "e1");
    assert_eq!(event.hours, Some(2.0));
    assert_eq!(event.event_type.as_deref(), Some("workshop"));
    assert_eq!(event.hacknight.as_deref(), Some("westside"));
    assert!(event.check_in_ready);
}

#[test]
fn legacy_event_defaults_hours_and_type() {
    let event = legacy_event("e1");
    assert!(!event.check_in_ready);
    assert_eq!(event.duration_hours(), DEFAULT_EVENT_HOURS);
    assert_eq!(event.kind(), DEFAULT_EVENT_TYPE);
    assert_eq!(event.location(), None);
}

#[test]
fn zero_hours_counts_as_missing() {
    let mut event = legacy_event("e1");
    event.hours = Some(0.0);
    assert_eq!(event.duration_hours(), 3.0);
    event.hours = Some(1.5);
    assert_eq!(event.duration_hours(), 1.5);
}

#[test]
fn normalize_event_fills_defaults_and_title_cases() {
    let mut event = legacy_event("e1");
    event.event_type = Some("COMMUNITY meeting".to_owned());
    event.hacknight = Some("online".to_owned());

    let normalized = normalize_event(event);
    assert_eq!(normalized.hours, Some(3.0));
    assert_eq!(normalized.event_type.as_deref(), Some("Community Meeting"));
    assert_eq!(normalized.hacknight.as_deref(), Some("Online"));
}

#[test]
fn normalize_event_drops_blank_location_and_type() {
    let mut event = legacy_event("e1");
    event.event_type = Some("   ".to_owned());
    event.hacknight = Some(String::new());

    let normalized = normalize_event(event);
    assert_eq!(normalized.event_type.as_deref(), Some("Hacknight"));
    assert_eq!(normalized.hacknight, None);
}

#[test]
fn title_case_handles_quotes_and_brackets() {
    assert_eq!(title_case("downtown la"), "Downtown La");
    assert_eq!(title_case("o'brien (east side)"), "O'Brien (East Side)");
    assert_eq!(title_case("  HACKNIGHT "), "Hacknight");
    assert_eq!(title_case(""), "");
}

#[test]
fn check_in_deserializes_camel_case() {
    let check_in: CheckIn = serde_json::from_value(json!({
        "_id": "c1",
        "eventId": "e1",
        "userId": "u1",
        "checkedInAs": "volunteer"
    }))
    .unwrap();
    assert_eq!(check_in.event_id, "e1");
    assert_eq!(check_in.user_id, "u1");
    assert_eq!(check_in.created_date, None);
}

#[test]
fn user_display_name_prefers_full_name() {
    let user: UserRecord = serde_json::from_value(json!({
        "_id": "u1",
        "email": "ada@example.com",
        "accessLevel": "admin",
        "name": { "firstName": "Ada", "lastName": "Lovelace" }
    }))
    .unwrap();
    assert_eq!(user.display_name(), "Ada Lovelace");

    let anonymous = UserRecord { name: None, ..user };
    assert_eq!(anonymous.display_name(), "ada@example.com");
}
