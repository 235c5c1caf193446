//! Wire types for the remote login endpoint.
//!
//! DESIGN
//! ======
//! The endpoint's failure bodies are loosely shaped, so every response is
//! folded into a [`LoginOutcome`] here and nothing downstream inspects raw
//! JSON.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Credentials posted to the login endpoint.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Success body. Only the token matters to this client.
#[derive(Debug, Deserialize)]
struct LoginResponse {
    #[serde(default, alias = "accessToken")]
    token: Option<String>,
}

/// Failure body, when the server sends one.
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    message: Option<String>,
}

/// Result of a login attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Credentials accepted; the server issued `token`.
    Authenticated { token: String },
    /// The server answered with a non-success status.
    Rejected { status: u16, message: String },
    /// No usable answer: network error, undecodable body, or no token.
    TransportFailed { reason: String },
}

impl LoginOutcome {
    pub fn transport(reason: impl Into<String>) -> Self {
        Self::TransportFailed { reason: reason.into() }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }
}

/// Fold an HTTP status and raw body into a [`LoginOutcome`].
pub fn classify_response(status: u16, body: &str) -> LoginOutcome {
    if !(200..300).contains(&status) {
        let message = serde_json::from_str::<ErrorResponse>(body)
            .ok()
            .and_then(|e| e.message)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| rejected_message(status));
        return LoginOutcome::Rejected { status, message };
    }

    match serde_json::from_str::<LoginResponse>(body) {
        Ok(LoginResponse { token: Some(token) }) if !token.is_empty() => LoginOutcome::Authenticated { token },
        Ok(_) => LoginOutcome::transport("login response did not include a token"),
        Err(e) => LoginOutcome::transport(format!("login response parse error: {e}")),
    }
}

fn rejected_message(status: u16) -> String {
    format!("login rejected: {status}")
}
