use super::*;

#[test]
fn event_path_appends_id() {
    assert_eq!(event_path("5e1a"), "/api/events/5e1a");
}

#[test]
fn join_url_normalizes_slashes() {
    assert_eq!(join_url("http://localhost:4000/", "/api/events"), "http://localhost:4000/api/events");
    assert_eq!(join_url("http://localhost:4000", "api/users"), "http://localhost:4000/api/users");
}
