use super::*;

#[test]
fn missing_override_uses_default() {
    assert_eq!(resolve_endpoint(None), DEFAULT_LOGIN_ENDPOINT);
}

#[test]
fn blank_override_uses_default() {
    assert_eq!(resolve_endpoint(Some("   ")), DEFAULT_LOGIN_ENDPOINT);
}

#[test]
fn override_is_trimmed() {
    assert_eq!(resolve_endpoint(Some(" http://localhost:8080/auth/login ")), "http://localhost:8080/auth/login");
}

#[test]
fn default_endpoint_is_dummyjson_login() {
    assert_eq!(DEFAULT_LOGIN_ENDPOINT, "https://dummyjson.com/auth/login");
}
