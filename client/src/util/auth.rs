//! Navigation guard decision logic.
//!
//! SYSTEM CONTEXT
//! ==============
//! `components::route_guard::RouteGuard` calls [`check_navigation`] on every
//! route change. The check reads the session cookie straight from the jar and
//! never consults `AuthStore`'s flag, so the two can disagree (see
//! `state::auth`).

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::routes::{LOGIN_PATH, LOGIN_ROUTE_NAME};
use crate::state::auth::TOKEN_COOKIE;
use crate::util::cookies::CookieJar;

/// Destination of a pending navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteTarget<'a> {
    /// Route name from the route table, if the path is known.
    pub name: Option<&'a str>,
    pub path: &'a str,
}

/// Outcome of a guard check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Let the navigation render its destination.
    Proceed,
    /// Cancel the navigation and go to this path instead.
    Redirect(&'static str),
}

/// Decide a navigation given the current token value.
///
/// An empty token counts as absent. The login route is always allowed.
pub fn guard_decision(token: Option<&str>, to: &RouteTarget<'_>) -> GuardDecision {
    let has_token = token.is_some_and(|t| !t.is_empty());
    if !has_token && to.name != Some(LOGIN_ROUTE_NAME) {
        GuardDecision::Redirect(LOGIN_PATH)
    } else {
        GuardDecision::Proceed
    }
}

/// Read the token cookie and decide `to`.
///
/// A jar read failure is treated as a missing token.
pub fn check_navigation(cookies: &dyn CookieJar, to: &RouteTarget<'_>) -> GuardDecision {
    let token = cookies.get(TOKEN_COOKIE).unwrap_or_else(|e| {
        log::warn!("guard: token cookie unreadable, treating as absent: {e}");
        None
    });
    let decision = guard_decision(token.as_deref(), to);
    if let GuardDecision::Redirect(target) = decision {
        log::debug!("guard: redirecting {} -> {target}", to.path);
    }
    decision
}
