//! Page-local state models.
//!
//! DESIGN
//! ======
//! State types are plain data with transition methods; pages wrap them in
//! `RwSignal`s. Keeping transitions here lets tests drive them without a DOM.

pub mod activity;
pub mod login;
