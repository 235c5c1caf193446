use axum::body::Body;
use axum::http::{HeaderValue, Request, Response, header};
use tower::ServiceExt;

use super::*;

fn test_options() -> LeptosOptions {
    LeptosOptions::builder().output_name("tokengate").build()
}

/// Page load as a browser sends it; the HTML accept header is what turns an
/// SSR redirect into a 302.
async fn get_page(uri: &str, cookie: Option<&str>) -> Response<Body> {
    let mut req = Request::builder().uri(uri).header(header::ACCEPT, "text/html");
    if let Some(cookie) = cookie {
        req = req.header(header::COOKIE, cookie);
    }
    app(test_options())
        .oneshot(req.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

fn location(resp: &Response<Body>) -> Option<&HeaderValue> {
    resp.headers().get(header::LOCATION)
}

#[tokio::test]
async fn healthz_returns_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

// =============================================================
// Route listing
// =============================================================

#[tokio::test]
async fn route_list_covers_login_and_index() {
    let routes = generate_route_list(App);
    let paths: Vec<&str> = routes.iter().map(|r| r.path()).collect();
    assert!(paths.contains(&"/"), "{paths:?}");
    assert!(paths.contains(&"/login"), "{paths:?}");
}

// =============================================================
// Guarded SSR
// =============================================================

#[tokio::test]
async fn index_without_cookie_redirects_to_login() {
    let resp = get_page("/", None).await;
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp).map(HeaderValue::as_bytes), Some(&b"/login"[..]));
}

#[tokio::test]
async fn index_with_empty_token_redirects_to_login() {
    let resp = get_page("/", Some("token=")).await;
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp).map(HeaderValue::as_bytes), Some(&b"/login"[..]));
}

#[tokio::test]
async fn index_with_token_renders() {
    let resp = get_page("/", Some("token=abc")).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(location(&resp).is_none());
}

#[tokio::test]
async fn login_without_cookie_renders() {
    let resp = get_page("/login", None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(location(&resp).is_none());
}

#[tokio::test]
async fn unknown_path_without_cookie_redirects_to_login() {
    let resp = get_page("/nowhere", None).await;
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp).map(HeaderValue::as_bytes), Some(&b"/login"[..]));
}
