//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `title`) so pages depend only on the
//! small model they use.

pub mod auth;
pub mod title;
