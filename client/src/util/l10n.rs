//! Localized UI messages.
//!
//! Keys are dot-joined (`event.category.VERSION`). A missing key renders as
//! the key itself so untranslated labels stay visible instead of blank.

#[cfg(test)]
#[path = "l10n_test.rs"]
mod l10n_test;

use std::collections::HashMap;
use std::sync::Arc;

const DEFAULT_MESSAGES: &[(&str, &str)] = &[
    ("event.category.VERSION", "Version"),
    ("event.category.QUALITY_GATE", "Quality Gate"),
    ("event.category.QUALITY_PROFILE", "Quality Profile"),
    ("event.category.OTHER", "Other"),
    ("login.login", "Login"),
    ("login.password", "Password"),
    ("login.login_with_x", "Log in with"),
    ("sessions.log_in", "Log in"),
    ("project_activity.page", "Activity"),
    ("project_activity.filter_events", "Filter events"),
    ("project_activity.all_events", "All"),
    ("show_more", "Show More"),
];

/// Message bundle provided through Leptos context.
#[derive(Clone, Debug, Default)]
pub struct Messages(Arc<HashMap<String, String>>);

impl Messages {
    pub fn new<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self(Arc::new(entries.into_iter().map(|(k, v)| (k.into(), v.into())).collect()))
    }

    /// The built-in English bundle.
    #[must_use]
    pub fn english() -> Self {
        Self::new(DEFAULT_MESSAGES.iter().copied())
    }

    /// Look up the message for `keys` joined with `.`.
    #[must_use]
    pub fn translate(&self, keys: &[&str]) -> String {
        let key = keys.join(".");
        self.0.get(&key).cloned().unwrap_or(key)
    }
}

/// Translate using the bundle in context, falling back to the key.
pub fn translate(keys: &[&str]) -> String {
    leptos::prelude::use_context::<Messages>().unwrap_or_default().translate(keys)
}
