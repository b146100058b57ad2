use super::*;
use serde_json::json;

#[test]
fn validate_admin_email_trims_and_accepts() {
    assert_eq!(validate_admin_email("  ada@example.org "), Ok("ada@example.org".to_owned()));
}

#[test]
fn validate_admin_email_rejects_blank() {
    assert_eq!(validate_admin_email(""), Err(EmailError::Blank));
    assert_eq!(validate_admin_email("   "), Err(EmailError::Blank));
    assert_eq!(EmailError::Blank.to_string(), "Please don't leave the field blank.");
}

#[test]
fn validate_admin_email_requires_at_and_dot() {
    assert_eq!(validate_admin_email("ada.example.org"), Err(EmailError::Malformed));
    assert_eq!(validate_admin_email("ada@example"), Err(EmailError::Malformed));
    assert_eq!(EmailError::Malformed.to_string(), "Please format the email address correctly.");
}

#[test]
fn check_user_response_parses_false_and_record() {
    let missing: CheckUserResponse = serde_json::from_value(json!(false)).unwrap();
    assert_eq!(missing, CheckUserResponse::Missing(false));

    let found: CheckUserResponse = serde_json::from_value(json!({
        "_id": "u1",
        "email": "ada@example.org",
        "accessLevel": "admin"
    }))
    .unwrap();
    assert!(matches!(found, CheckUserResponse::Found(ref user) if user.id == "u1"));
}

#[test]
fn unknown_email_is_rejected() {
    let decision = AccessDecision::from_response(CheckUserResponse::Missing(false), "ada@example.org");
    assert_eq!(decision, AccessDecision::UnknownEmail);
    assert_eq!(decision.message(), Some("Please enter the correct email address."));
}

#[test]
fn non_admin_is_rejected() {
    let user: UserRecord = serde_json::from_value(json!({
        "_id": "u2",
        "email": "vol@example.org",
        "accessLevel": "user"
    }))
    .unwrap();
    let decision = AccessDecision::from_response(CheckUserResponse::Found(user), "vol@example.org");
    assert_eq!(decision, AccessDecision::InsufficientAccess);
    assert!(decision.message().unwrap().contains("access level"));
}

#[test]
fn admin_without_stored_email_uses_submitted_one() {
    let user: UserRecord = serde_json::from_value(json!({ "_id": "u3", "accessLevel": "admin" })).unwrap();
    let decision = AccessDecision::from_response(CheckUserResponse::Found(user), "boss@example.org");
    assert_eq!(decision, AccessDecision::Admin { email: "boss@example.org".to_owned() });
    assert_eq!(decision.message(), None);
}
