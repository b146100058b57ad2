use super::*;

#[test]
fn request_failed_message_formats_status() {
    assert_eq!(request_failed_message("events", 500), "events request failed: 500");
}

#[test]
fn sign_in_requires_exactly_200() {
    assert!(is_sign_in_accepted(200));
    assert!(!is_sign_in_accepted(201));
    assert!(!is_sign_in_accepted(401));
}

#[test]
fn custom_header_value_matches_build_env() {
    assert_eq!(custom_header_value(), option_env!("CUSTOM_REQUEST_HEADER").unwrap_or_default());
}
