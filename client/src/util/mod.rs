//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (cookie storage) and
//! the guard's decision logic from page and component code so both stay
//! testable without a DOM.

pub mod auth;
pub mod cookies;
