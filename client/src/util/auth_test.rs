use super::*;
use crate::routes::route_name;
use crate::util::cookies::{CookieError, MemoryCookieJar};

fn target(path: &str) -> RouteTarget<'_> {
    RouteTarget { name: route_name(path), path }
}

struct BrokenJar;

impl CookieJar for BrokenJar {
    fn get(&self, _name: &str) -> Result<Option<String>, CookieError> {
        Err(CookieError::Unavailable("blocked".to_owned()))
    }

    fn set(&self, _name: &str, _value: &str) -> Result<(), CookieError> {
        Err(CookieError::Write("blocked".to_owned()))
    }

    fn remove_all(&self) -> Result<(), CookieError> {
        Err(CookieError::Unavailable("blocked".to_owned()))
    }
}

// =============================================================
// guard_decision
// =============================================================

#[test]
fn redirects_when_token_missing_and_not_login() {
    for path in ["/", "/settings", "/anything/else"] {
        assert_eq!(
            guard_decision(None, &target(path)),
            GuardDecision::Redirect("/login"),
            "path {path}"
        );
    }
}

#[test]
fn empty_token_counts_as_missing() {
    assert_eq!(guard_decision(Some(""), &target("/")), GuardDecision::Redirect("/login"));
}

#[test]
fn login_route_always_proceeds() {
    assert_eq!(guard_decision(None, &target("/login")), GuardDecision::Proceed);
    assert_eq!(guard_decision(Some("abc"), &target("/login")), GuardDecision::Proceed);
}

#[test]
fn token_present_proceeds_everywhere() {
    for path in ["/", "/login", "/settings"] {
        assert_eq!(guard_decision(Some("abc123"), &target(path)), GuardDecision::Proceed, "path {path}");
    }
}

#[test]
fn exemption_is_by_name_not_path() {
    let unnamed_login_path = RouteTarget { name: None, path: "/login" };
    assert_eq!(guard_decision(None, &unnamed_login_path), GuardDecision::Redirect("/login"));

    let named_elsewhere = RouteTarget { name: Some("login"), path: "/elsewhere" };
    assert_eq!(guard_decision(None, &named_elsewhere), GuardDecision::Proceed);
}

// =============================================================
// check_navigation
// =============================================================

#[test]
fn check_navigation_reads_cookie_each_time() {
    let jar = MemoryCookieJar::new();
    assert_eq!(check_navigation(&jar, &target("/")), GuardDecision::Redirect("/login"));

    jar.set(TOKEN_COOKIE, "abc123").unwrap();
    assert_eq!(check_navigation(&jar, &target("/")), GuardDecision::Proceed);

    jar.remove_all().unwrap();
    assert_eq!(check_navigation(&jar, &target("/")), GuardDecision::Redirect("/login"));
}

#[test]
fn check_navigation_ignores_other_cookies() {
    let jar = MemoryCookieJar::from_header("theme=dark; session_token=zzz");
    assert_eq!(check_navigation(&jar, &target("/")), GuardDecision::Redirect("/login"));
}

#[test]
fn check_navigation_treats_read_failure_as_missing() {
    assert_eq!(check_navigation(&BrokenJar, &target("/")), GuardDecision::Redirect("/login"));
    assert_eq!(check_navigation(&BrokenJar, &target("/login")), GuardDecision::Proceed);
}
