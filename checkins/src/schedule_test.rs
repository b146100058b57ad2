use super::*;

fn dated(id: &str, date: Option<&str>) -> Event {
    Event {
        id: id.to_owned(),
        name: None,
        date: date.map(str::to_owned),
        hours: None,
        event_type: None,
        hacknight: None,
        check_in_ready: false,
    }
}

#[test]
fn next_event_picks_latest_date() {
    let events = vec![
        dated("old", Some("2020-05-20T02:00:00.000Z")),
        dated("new", Some("2021-01-12T03:00:00.000Z")),
        dated("mid", Some("2020-11-01T03:00:00Z")),
    ];
    assert_eq!(next_event(&events).map(|e| e.id.as_str()), Some("new"));
}

#[test]
fn next_event_prefers_first_on_tie_and_skips_bad_dates() {
    let events = vec![
        dated("bad", Some("next tuesday")),
        dated("first", Some("2021-01-12T03:00:00Z")),
        dated("none", None),
        dated("second", Some("2021-01-12T03:00:00.000Z")),
    ];
    assert_eq!(next_event(&events).map(|e| e.id.as_str()), Some("first"));
}

#[test]
fn next_event_empty_is_none() {
    assert!(next_event(&[]).is_none());
    assert!(next_event(&[dated("none", None)]).is_none());
}

#[test]
fn display_date_formats_utc() {
    let event = dated("e1", Some("2021-01-11T19:30:00-08:00"));
    assert_eq!(display_date(&event), "2021-01-12 03:30 UTC");
    assert_eq!(display_date(&dated("e2", None)), "Date TBD");
}
