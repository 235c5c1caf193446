//! Cookie accessor shared by the auth store and the navigation guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything that touches the session cookie goes through [`CookieJar`] so
//! the store and guard can be handed an in-memory jar in tests and during SSR,
//! and the real `document.cookie` jar in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Storage failures are returned as [`CookieError`]; this module never retries
//! or swallows them. Callers decide whether a failure is fatal.

#[cfg(test)]
#[path = "cookies_test.rs"]
mod cookies_test;

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use cookie::Cookie;

/// Path attached to every cookie this crate writes.
const COOKIE_PATH: &str = "/";

/// Failure reported by a cookie storage backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CookieError {
    #[error("cookie storage unavailable: {0}")]
    Unavailable(String),
    #[error("cookie write rejected: {0}")]
    Write(String),
}

/// Key-value cookie storage.
///
/// Implementations delegate validation, expiry and scoping to whatever
/// substrate backs them.
pub trait CookieJar: Send + Sync {
    /// Read the value stored under `name`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage cannot be read.
    fn get(&self, name: &str) -> Result<Option<String>, CookieError>;

    /// Store `value` under `name`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage rejects the write.
    fn set(&self, name: &str, value: &str) -> Result<(), CookieError>;

    /// Remove every cookie visible to this jar.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage cannot be read or written.
    fn remove_all(&self) -> Result<(), CookieError>;
}

/// Jar handle shared between the store, the guard and the pages.
pub type SharedCookieJar = Arc<dyn CookieJar>;

/// Split a `Cookie:` header (or `document.cookie`) into decoded pairs.
///
/// Malformed segments are skipped. Order is preserved, so callers that want
/// the first match for a name get browser semantics.
pub fn parse_cookie_header(raw: &str) -> Vec<(String, String)> {
    Cookie::split_parse_encoded(raw)
        .filter_map(Result::ok)
        .map(|c| (c.name().to_owned(), c.value().to_owned()))
        .collect()
}

/// Cookie names exactly as they appear in `raw`, without percent-decoding.
///
/// Removal has to address a cookie by the name the browser stored, which is
/// not necessarily what [`parse_cookie_header`] decodes it to.
pub fn raw_cookie_names(raw: &str) -> Vec<String> {
    Cookie::split_parse(raw)
        .filter_map(Result::ok)
        .map(|c| c.name().to_owned())
        .collect()
}

/// Serialized assignment for `document.cookie`.
pub fn set_cookie_string(name: &str, value: &str) -> String {
    Cookie::build((name, value))
        .path(COOKIE_PATH)
        .build()
        .encoded()
        .to_string()
}

/// Serialized assignment that expires `name` immediately. `name` is written
/// verbatim, so pass it in the form returned by [`raw_cookie_names`].
pub fn removal_cookie_string(name: &str) -> String {
    let mut cookie = Cookie::build((name.to_owned(), String::new()))
        .path(COOKIE_PATH)
        .build();
    cookie.make_removal();
    cookie.to_string()
}

// =============================================================================
// IN-MEMORY JAR
// =============================================================================

/// Process-local jar used by tests and for per-request SSR snapshots.
#[derive(Debug, Default)]
pub struct MemoryCookieJar {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemoryCookieJar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a jar from a `Cookie:` request header. The first occurrence of a
    /// name wins.
    pub fn from_header(raw: &str) -> Self {
        let mut entries = BTreeMap::new();
        for (name, value) in parse_cookie_header(raw) {
            entries.entry(name).or_insert(value);
        }
        Self { entries: Mutex::new(entries) }
    }

    /// Number of cookies currently stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the jar's lock is poisoned.
    pub fn len(&self) -> Result<usize, CookieError> {
        Ok(self.lock()?.len())
    }

    /// # Errors
    ///
    /// Returns an error if the jar's lock is poisoned.
    pub fn is_empty(&self) -> Result<bool, CookieError> {
        Ok(self.len()? == 0)
    }

    fn lock(&self) -> Result<MutexGuard<'_, BTreeMap<String, String>>, CookieError> {
        self.entries
            .lock()
            .map_err(|_| CookieError::Unavailable("memory jar lock poisoned".to_owned()))
    }
}

impl CookieJar for MemoryCookieJar {
    fn get(&self, name: &str) -> Result<Option<String>, CookieError> {
        Ok(self.lock()?.get(name).cloned())
    }

    fn set(&self, name: &str, value: &str) -> Result<(), CookieError> {
        self.lock()?.insert(name.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove_all(&self) -> Result<(), CookieError> {
        self.lock()?.clear();
        Ok(())
    }
}

// =============================================================================
// BROWSER JAR
// =============================================================================

/// Jar backed by `document.cookie`. Only cookies readable from script are
/// visible to it.
#[cfg(feature = "hydrate")]
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserCookieJar;

#[cfg(feature = "hydrate")]
impl BrowserCookieJar {
    fn document() -> Result<web_sys::HtmlDocument, CookieError> {
        use wasm_bindgen::JsCast;

        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.dyn_into::<web_sys::HtmlDocument>().ok())
            .ok_or_else(|| CookieError::Unavailable("no html document".to_owned()))
    }

    fn read_raw() -> Result<String, CookieError> {
        Self::document()?
            .cookie()
            .map_err(|e| CookieError::Unavailable(format!("{e:?}")))
    }

    fn read_all() -> Result<Vec<(String, String)>, CookieError> {
        Ok(parse_cookie_header(&Self::read_raw()?))
    }

    fn write(assignment: &str) -> Result<(), CookieError> {
        Self::document()?
            .set_cookie(assignment)
            .map_err(|e| CookieError::Write(format!("{e:?}")))
    }
}

#[cfg(feature = "hydrate")]
impl CookieJar for BrowserCookieJar {
    fn get(&self, name: &str) -> Result<Option<String>, CookieError> {
        Ok(Self::read_all()?
            .into_iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v))
    }

    fn set(&self, name: &str, value: &str) -> Result<(), CookieError> {
        Self::write(&set_cookie_string(name, value))
    }

    fn remove_all(&self) -> Result<(), CookieError> {
        for name in raw_cookie_names(&Self::read_raw()?) {
            Self::write(&removal_cookie_string(&name))?;
        }
        Ok(())
    }
}

/// Pick the jar for the current build.
///
/// Hydrate builds talk to `document.cookie`. SSR renders snapshot the
/// incoming request's `Cookie` header, so the guard sees what the browser
/// sent. Anything else gets an empty in-memory jar.
pub fn session_cookies() -> SharedCookieJar {
    #[cfg(feature = "hydrate")]
    {
        Arc::new(BrowserCookieJar)
    }
    #[cfg(all(feature = "ssr", not(feature = "hydrate")))]
    {
        let header = leptos::prelude::use_context::<http::request::Parts>()
            .and_then(|parts| {
                parts
                    .headers
                    .get(http::header::COOKIE)
                    .and_then(|v| v.to_str().ok())
                    .map(str::to_owned)
            })
            .unwrap_or_default();
        Arc::new(MemoryCookieJar::from_header(&header))
    }
    #[cfg(not(any(feature = "hydrate", feature = "ssr")))]
    {
        Arc::new(MemoryCookieJar::new())
    }
}
