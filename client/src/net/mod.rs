//! Networking modules for the login call.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns the transport seam and its HTTP implementation; `types` defines
//! the wire schema and the outcome type the store acts on.

pub mod api;
pub mod types;
