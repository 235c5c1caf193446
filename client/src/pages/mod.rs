//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its route-scoped orchestration; access control is left to
//! `components::route_guard`, which wraps all of them.

pub mod home;
pub mod login;
