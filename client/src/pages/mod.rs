//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (query parameters, fetching)
//! and delegates rendering details to `components`.

pub mod login;
pub mod project_activity;
