//! Login transport: the one network call this client makes.
//!
//! Client-side (hydrate): a real JSON `POST` via `gloo-net`.
//! Server-side (SSR) and tests: [`HttpLoginTransport`] reports a transport
//! failure, since logging in is only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure becomes a [`LoginOutcome`] value. Nothing here panics, and
//! there is no timeout or retry beyond what the browser's fetch does.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{LoginOutcome, LoginRequest};
#[cfg(feature = "hydrate")]
use super::types::classify_response;

/// Something that can exchange credentials for a [`LoginOutcome`].
///
/// `AuthStore::authenticate_user` is generic over this so tests can script
/// responses without a network.
pub trait LoginTransport {
    fn login(&self, request: &LoginRequest) -> impl Future<Output = LoginOutcome>;
}

/// HTTP transport posting JSON to a fixed endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpLoginTransport {
    endpoint: String,
}

impl HttpLoginTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }

    /// Transport for the endpoint baked into this build.
    pub fn from_config() -> Self {
        Self::new(crate::config::login_endpoint())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl LoginTransport for HttpLoginTransport {
    async fn login(&self, request: &LoginRequest) -> LoginOutcome {
        #[cfg(feature = "hydrate")]
        {
            log::info!("login: POST {} as {}", self.endpoint, request.username);
            let pending = match gloo_net::http::Request::post(&self.endpoint).json(request) {
                Ok(pending) => pending,
                Err(e) => return LoginOutcome::transport(format!("request build error: {e}")),
            };
            let resp = match pending.send().await {
                Ok(resp) => resp,
                Err(e) => return LoginOutcome::transport(format!("network error: {e}")),
            };
            let status = resp.status();
            let body = match resp.text().await {
                Ok(body) => body,
                Err(e) => return LoginOutcome::transport(format!("response read error: {e}")),
            };
            classify_response(status, &body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            LoginOutcome::transport(format!("{} not reachable outside the browser", self.endpoint))
        }
    }
}
