//! Build-time client configuration.
//!
//! The WASM bundle has no process environment, so settings are read with
//! `option_env!` when the crate is compiled.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_LOGIN_ENDPOINT: &str = "https://dummyjson.com/auth/login";

/// Login endpoint, overridable with `TOKENGATE_LOGIN_ENDPOINT` at build time.
pub fn login_endpoint() -> &'static str {
    resolve_endpoint(option_env!("TOKENGATE_LOGIN_ENDPOINT"))
}

fn resolve_endpoint(raw: Option<&'static str>) -> &'static str {
    match raw.map(str::trim) {
        Some(value) if !value.is_empty() => value,
        _ => DEFAULT_LOGIN_ENDPOINT,
    }
}
