//! Login form container state.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use wire::IdentityProvider;

use crate::net::api::ApiError;

/// Two-state machine of the login form container.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoginFormState {
    /// Identity providers not fetched yet; nothing is rendered.
    #[default]
    Loading,
    /// Providers loaded; the form is rendered.
    Ready(Vec<IdentityProvider>),
}

impl LoginFormState {
    /// Providers to render, `None` while loading.
    #[must_use]
    pub fn providers(&self) -> Option<&[IdentityProvider]> {
        match self {
            Self::Loading => None,
            Self::Ready(providers) => Some(providers),
        }
    }

    /// Apply the outcome of the provider fetch.
    ///
    /// A failed fetch leaves the container loading; there is no retry.
    #[must_use]
    pub fn resolve(self, result: Result<Vec<IdentityProvider>, ApiError>) -> Self {
        match result {
            Ok(providers) => Self::Ready(providers),
            Err(err) => {
                log::warn!("identity providers unavailable: {err}");
                self
            }
        }
    }
}

/// Where to send the browser after a successful login.
#[must_use]
pub fn redirect_target(return_to: Option<&str>, home_url: &str) -> String {
    return_to.filter(|url| !url.is_empty()).unwrap_or(home_url).to_owned()
}
