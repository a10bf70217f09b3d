//! Browser navigation helpers.

/// Send the browser to `url`. No-op outside the browser.
pub fn redirect(url: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(err) = window.location().set_href(url) {
            log::warn!("redirect to {url} failed: {err:?}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        log::debug!("redirect to {url} skipped outside the browser");
    }
}
