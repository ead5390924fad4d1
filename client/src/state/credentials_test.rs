use super::*;

// =============================================================
// Field updates
// =============================================================

#[test]
fn credentials_default_is_empty() {
    let creds = Credentials::default();
    assert_eq!(creds.username, "");
    assert_eq!(creds.email, "");
    assert_eq!(creds.password, "");
}

#[test]
fn set_reflects_most_recent_keystroke() {
    let mut creds = Credentials::default();
    for value in ["a", "ad", "ada", "ada@", "ada@x.io"] {
        creds.set(CredentialField::Email, value.to_owned());
    }
    assert_eq!(creds.get(CredentialField::Email), "ada@x.io");

    creds.set(CredentialField::Email, "ada@x.i".to_owned());
    assert_eq!(creds.get(CredentialField::Email), "ada@x.i");
}

#[test]
fn set_only_touches_addressed_field() {
    let mut creds = Credentials::default();
    creds.set(CredentialField::Username, "ada".to_owned());
    creds.set(CredentialField::Password, "hunter2".to_owned());
    assert_eq!(creds.get(CredentialField::Username), "ada");
    assert_eq!(creds.get(CredentialField::Email), "");
    assert_eq!(creds.get(CredentialField::Password), "hunter2");
}

#[test]
fn set_keeps_whitespace_verbatim() {
    let mut creds = Credentials::default();
    creds.set(CredentialField::Email, "  ada@x.io ".to_owned());
    assert_eq!(creds.email, "  ada@x.io ");
}

// =============================================================
// Request bodies
// =============================================================

fn filled() -> Credentials {
    Credentials {
        username: "ada".to_owned(),
        email: "ada@x.io".to_owned(),
        password: "hunter2".to_owned(),
    }
}

#[test]
fn login_request_serializes_email_and_password_only() {
    let body = serde_json::to_value(filled().login_request()).unwrap();
    assert_eq!(
        body,
        serde_json::json!({ "email": "ada@x.io", "password": "hunter2" })
    );
}

#[test]
fn register_request_serializes_all_three_fields() {
    let body = serde_json::to_value(filled().register_request()).unwrap();
    assert_eq!(
        body,
        serde_json::json!({ "username": "ada", "email": "ada@x.io", "password": "hunter2" })
    );
}

#[test]
fn register_request_sends_empty_username_when_untouched() {
    let mut creds = filled();
    creds.username.clear();
    let body = serde_json::to_value(creds.register_request()).unwrap();
    assert_eq!(body["username"], "");
}

// =============================================================
// Debug
// =============================================================

#[test]
fn debug_output_redacts_password() {
    let rendered = format!("{:?}", filled());
    assert!(rendered.contains("ada@x.io"));
    assert!(!rendered.contains("hunter2"));
    assert!(rendered.contains("<redacted>"));
}
