//! Route table: names and paths for every page the router knows.
//!
//! The navigation guard keys its login exemption on route *names*, so the
//! mapping from path to name lives here next to the paths `App` registers.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Name of the always-allowed login route.
pub const LOGIN_ROUTE_NAME: &str = "login";
/// Name of the landing route.
pub const INDEX_ROUTE_NAME: &str = "index";

pub const LOGIN_PATH: &str = "/login";
pub const INDEX_PATH: &str = "/";

const ROUTES: &[(&str, &str)] = &[(INDEX_ROUTE_NAME, INDEX_PATH), (LOGIN_ROUTE_NAME, LOGIN_PATH)];

/// Resolve a location path to its route name.
///
/// Query strings, fragments and a trailing slash are ignored. Unknown paths
/// have no name.
pub fn route_name(path: &str) -> Option<&'static str> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.trim_end_matches('/');
    let normalized = if trimmed.is_empty() { INDEX_PATH } else { trimmed };
    ROUTES
        .iter()
        .find(|(_, route_path)| *route_path == normalized)
        .map(|(name, _)| *name)
}
