//! Networking modules for the REST endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns the transport seam and the endpoint helpers, `session` exposes
//! the login-related calls as an injectable capability.

pub mod api;
pub mod session;
