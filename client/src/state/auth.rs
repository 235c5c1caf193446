//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` builds one [`AuthStore`] per mount and provides it through context.
//! The login page drives [`AuthStore::authenticate_user`], the home page
//! reads the flag and calls [`AuthStore::log_user_out`].
//!
//! TRADE-OFFS
//! ==========
//! The `authenticated` flag is seeded once from the token cookie and then only
//! moves through store actions. The navigation guard reads the cookie itself,
//! so a cookie that disappears behind the store's back (expiry, another tab)
//! leaves the two disagreeing until the next login or logout.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net::api::LoginTransport;
use crate::net::types::{LoginOutcome, LoginRequest};
use crate::util::cookies::{CookieError, CookieJar, SharedCookieJar};

/// Cookie holding the session token.
pub const TOKEN_COOKIE: &str = "token";

/// Authentication flag exposed to the UI.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub authenticated: bool,
}

impl AuthState {
    /// Seed from token-cookie presence. Empty or unreadable counts as absent.
    pub fn from_cookies(cookies: &dyn CookieJar) -> Self {
        let authenticated = match cookies.get(TOKEN_COOKIE) {
            Ok(token) => token.is_some_and(|t| !t.is_empty()),
            Err(e) => {
                log::warn!("auth: token cookie unreadable at startup: {e}");
                false
            }
        };
        Self { authenticated }
    }
}

/// Store owning the auth flag and the cookie jar it writes through.
#[derive(Clone)]
pub struct AuthStore {
    state: ArcRwSignal<AuthState>,
    cookies: SharedCookieJar,
}

impl AuthStore {
    pub fn new(cookies: SharedCookieJar) -> Self {
        let initial = AuthState::from_cookies(cookies.as_ref());
        log::debug!("auth: store created, authenticated={}", initial.authenticated);
        Self { state: ArcRwSignal::new(initial), cookies }
    }

    /// Reactive handle on the flag for views.
    pub fn state(&self) -> ArcRwSignal<AuthState> {
        self.state.clone()
    }

    /// Current flag, without subscribing.
    pub fn is_authenticated(&self) -> bool {
        self.state.get_untracked().authenticated
    }

    pub fn cookies(&self) -> &SharedCookieJar {
        &self.cookies
    }

    /// Exchange credentials for a token and persist it.
    ///
    /// On [`LoginOutcome::Authenticated`] the token is written to the
    /// `token` cookie and the flag is set. Any other outcome leaves both the
    /// cookie jar and the flag untouched and is handed back to the caller.
    ///
    /// # Errors
    ///
    /// Returns an error if the token cookie cannot be written. The flag is
    /// not set in that case.
    pub async fn authenticate_user<T: LoginTransport>(
        &self,
        transport: &T,
        request: &LoginRequest,
    ) -> Result<LoginOutcome, CookieError> {
        let outcome = transport.login(request).await;
        match &outcome {
            LoginOutcome::Authenticated { token } => {
                self.cookies.set(TOKEN_COOKIE, token)?;
                self.set_authentication();
                log::info!("auth: {} signed in", request.username);
            }
            LoginOutcome::Rejected { status, message } => {
                log::warn!("auth: login rejected ({status}): {message}");
            }
            LoginOutcome::TransportFailed { reason } => {
                log::warn!("auth: login failed: {reason}");
            }
        }
        Ok(outcome)
    }

    /// Mark the session authenticated. Idempotent.
    pub fn set_authentication(&self) {
        self.state.update(|s| s.authenticated = true);
    }

    /// Clear the flag and every cookie in the jar, not only the token.
    ///
    /// # Errors
    ///
    /// Returns an error if the jar cannot be cleared. The flag is already
    /// cleared by then.
    pub fn log_user_out(&self) -> Result<(), CookieError> {
        self.state.update(|s| s.authenticated = false);
        self.cookies.remove_all()?;
        log::info!("auth: signed out");
        Ok(())
    }
}
