use super::*;

#[test]
fn test_authorization_header_uses_token_scheme() {
    let credential = Credential::new("abc123");

    assert_eq!(credential.authorization_header(), "token abc123");
}

#[test]
fn test_debug_output_hides_token() {
    let credential = Credential::new("super-secret");

    let debug = format!("{credential:?}");
    assert!(!debug.contains("super-secret"));
    assert_eq!(debug, "Credential([REDACTED])");
}

#[test]
fn test_empty_token_is_passed_through() {
    let credential = Credential::new("");

    assert_eq!(credential.authorization_header(), "token ");
}
