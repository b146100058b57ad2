use super::*;
use crate::net::types::UserRecord;

fn admin() -> UserRecord {
    UserRecord {
        id: "u1".to_owned(),
        email: Some("ada@example.org".to_owned()),
        access_level: Some("admin".to_owned()),
        name: None,
    }
}

#[test]
fn should_redirect_unauth_when_not_loading_and_user_missing() {
    let state = AuthState { user: None, loading: false };
    assert!(should_redirect_unauth(&state));
    assert!(!should_redirect_authed(&state));
}

#[test]
fn should_not_redirect_while_loading() {
    let state = AuthState { user: None, loading: true };
    assert!(!should_redirect_unauth(&state));
    assert!(!should_redirect_authed(&state));
}

#[test]
fn signed_in_user_is_sent_to_dashboard() {
    let state = AuthState { user: Some(admin()), loading: false };
    assert!(!should_redirect_unauth(&state));
    assert!(should_redirect_authed(&state));
}
