use super::*;

#[test]
fn port_defaults_when_unset_or_blank() {
    assert_eq!(parse_port(None), Ok(3000));
    assert_eq!(parse_port(Some("  ")), Ok(3000));
}

#[test]
fn port_parses_value() {
    assert_eq!(parse_port(Some("8080")), Ok(8080));
    assert_eq!(parse_port(Some(" 8080 ")), Ok(8080));
}

#[test]
fn port_rejects_garbage() {
    assert_eq!(parse_port(Some("http")), Err(ConfigError::InvalidPort("http".into())));
    assert_eq!(parse_port(Some("70000")), Err(ConfigError::InvalidPort("70000".into())));
}

#[test]
fn bind_host_defaults_to_unspecified() {
    assert_eq!(parse_bind_host(None), Ok(DEFAULT_BIND_HOST));
    assert_eq!(parse_bind_host(Some("")), Ok(DEFAULT_BIND_HOST));
}

#[test]
fn bind_host_parses_ipv4_and_ipv6() {
    assert_eq!(parse_bind_host(Some("127.0.0.1")), Ok(IpAddr::V4(Ipv4Addr::LOCALHOST)));
    assert_eq!(parse_bind_host(Some("::1")), Ok("::1".parse::<IpAddr>().unwrap()));
}

#[test]
fn bind_host_rejects_hostnames() {
    assert_eq!(
        parse_bind_host(Some("localhost")),
        Err(ConfigError::InvalidBindHost("localhost".into()))
    );
}

#[test]
fn config_error_messages_name_the_variable() {
    assert_eq!(ConfigError::InvalidPort("x".into()).to_string(), "invalid PORT: x");
    assert_eq!(ConfigError::InvalidBindHost("y".into()).to_string(), "invalid BIND_HOST: y");
}
