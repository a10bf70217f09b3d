//! REST API helpers for the project activity and session endpoints.
//!
//! Every call goes through a [`JsonTransport`] so that pages can be handed a
//! fake in tests. In the browser (hydrate) [`BrowserTransport`] performs real
//! HTTP calls via `gloo-net`; on the server it reports
//! [`ApiError::Unavailable`] since these endpoints are only meaningful in the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport and HTTP failures are returned to the caller unchanged. Nothing
//! here retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;
use serde_json::Value;
use wire::{ActivityOptions, IdentityProvider, IdentityProvidersResponse, ProjectActivityResponse};

/// Query or form pairs in send order.
pub type Params = [(&'static str, String)];

/// Failure of a REST call.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Network(String),
    /// The server answered with a non-2xx status.
    #[error("{path} returned HTTP {status}")]
    Status { path: String, status: u16 },
    /// The response body did not have the expected shape.
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
    /// Called outside the browser.
    #[error("not available on server")]
    Unavailable,
}

/// Minimal HTTP capability used by the API helpers.
#[async_trait(?Send)]
pub trait JsonTransport {
    /// `GET path?query` and return the decoded JSON body.
    async fn get_json(&self, path: &str, query: &Params) -> Result<Value, ApiError>;

    /// `POST path` with an url-encoded form body, ignoring the response body.
    async fn post_form(&self, path: &str, form: &Params) -> Result<(), ApiError>;
}

/// Fetch one page of the project activity timeline.
///
/// Issues a single `GET /api/project_analyses/search`; see
/// [`wire::activity_query`] for which options are sent.
///
/// # Errors
///
/// Returns the transport's [`ApiError`] unchanged, or [`ApiError::Decode`]
/// if the body is not a paginated analyses response.
pub async fn get_project_activity<T>(
    transport: &T,
    project: &str,
    options: Option<&ActivityOptions>,
) -> Result<ProjectActivityResponse, ApiError>
where
    T: JsonTransport + ?Sized,
{
    let query = wire::activity_query(project, options);
    let body = transport.get_json(wire::PROJECT_ANALYSES_SEARCH, &query).await?;
    Ok(serde_json::from_value(body)?)
}

/// Fetch the identity providers offered on the login page.
///
/// # Errors
///
/// Returns the transport's [`ApiError`] unchanged, or [`ApiError::Decode`].
pub async fn get_identity_providers<T>(transport: &T) -> Result<Vec<IdentityProvider>, ApiError>
where
    T: JsonTransport + ?Sized,
{
    let body = transport.get_json(wire::IDENTITY_PROVIDERS, &[]).await?;
    let response: IdentityProvidersResponse = serde_json::from_value(body)?;
    Ok(response.identity_providers)
}

/// Exchange credentials for a session cookie.
///
/// # Errors
///
/// Returns [`ApiError::Status`] when the credentials are rejected, or the
/// transport's error.
pub async fn login<T>(transport: &T, login: &str, password: &str) -> Result<(), ApiError>
where
    T: JsonTransport + ?Sized,
{
    let form = [("login", login.to_owned()), ("password", password.to_owned())];
    transport.post_form(wire::LOGIN, &form).await
}

#[cfg(any(test, feature = "hydrate"))]
fn endpoint_url(base_url: &str, path: &str) -> String {
    format!("{}{path}", base_url.trim_end_matches('/'))
}

/// Real HTTP transport rooted at the web context's base URL.
#[derive(Clone, Debug, Default)]
pub struct BrowserTransport {
    base_url: String,
}

impl BrowserTransport {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }
}

#[async_trait(?Send)]
impl JsonTransport for BrowserTransport {
    async fn get_json(&self, path: &str, query: &Params) -> Result<Value, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = endpoint_url(&self.base_url, path);
            let resp = gloo_net::http::Request::get(&url)
                .query(query.iter().map(|(k, v)| (*k, v.as_str())))
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            if !resp.ok() {
                return Err(ApiError::Status { path: path.to_owned(), status: resp.status() });
            }
            let text = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
            Ok(serde_json::from_str(&text)?)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&self.base_url, path, query);
            Err(ApiError::Unavailable)
        }
    }

    async fn post_form(&self, path: &str, form: &Params) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = endpoint_url(&self.base_url, path);
            let body = form
                .iter()
                .map(|(k, v)| format!("{k}={}", String::from(js_sys::encode_uri_component(v))))
                .collect::<Vec<_>>()
                .join("&");
            let resp = gloo_net::http::Request::post(&url)
                .header("Content-Type", "application/x-www-form-urlencoded")
                .body(body)
                .map_err(|e| ApiError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            if !resp.ok() {
                return Err(ApiError::Status { path: path.to_owned(), status: resp.status() });
            }
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&self.base_url, path, form);
            Err(ApiError::Unavailable)
        }
    }
}
