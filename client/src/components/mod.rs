//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are presentational: they render the data they are given and
//! report user input through callbacks. Fetching lives in `pages`.

pub mod event;
pub mod login_form;
pub mod tooltips;
pub mod version_event;
