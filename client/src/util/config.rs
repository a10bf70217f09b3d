//! Runtime configuration of the web client.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Settings shared by every page, provided through Leptos context.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Web context root without trailing slash, e.g. `""` or `"/sonar"`.
    pub base_url: String,
}

impl AppConfig {
    #[must_use]
    pub fn with_base_url(raw: &str) -> Self {
        Self { base_url: raw.trim().trim_end_matches('/').to_owned() }
    }

    /// Read the base URL from `<meta name="base-url" content="...">`.
    ///
    /// Falls back to the root context when the tag is missing.
    #[cfg(feature = "hydrate")]
    #[must_use]
    pub fn from_document() -> Self {
        let content = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.query_selector("meta[name='base-url']").ok().flatten())
            .and_then(|meta| meta.get_attribute("content"));
        match content {
            Some(raw) => Self::with_base_url(&raw),
            None => {
                log::debug!("no base-url meta tag, using root context");
                Self::default()
            }
        }
    }

    /// Home location used after login when no `return_to` is given.
    #[must_use]
    pub fn home_url(&self) -> String {
        format!("{}/", self.base_url)
    }
}
