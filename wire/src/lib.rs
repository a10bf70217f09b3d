//! Shared JSON model for the project-activity and session endpoints.
//!
//! This crate owns the request/response shapes used by both `client` and
//! `cli`. Records are read-only on this side of the wire: they are decoded
//! from server responses and never mutated locally.


use serde::{Deserialize, Serialize};

/// Project analyses search endpoint.
pub const PROJECT_ANALYSES_SEARCH: &str = "/api/project_analyses/search";
/// Identity provider listing endpoint.
pub const IDENTITY_PROVIDERS: &str = "/api/users/identity_providers";
/// Credential exchange endpoint used by the login form.
pub const LOGIN: &str = "/api/authentication/login";

// =============================================================================
// ACTIVITY QUERY
// =============================================================================

/// Optional filters for a project activity search.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActivityOptions {
    /// Only return analyses carrying an event of this category.
    pub category: Option<String>,
    /// 1-based page index.
    pub page_index: Option<u32>,
    /// Number of analyses per page.
    pub page_size: Option<u32>,
}

impl ActivityOptions {
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    #[must_use]
    pub fn with_page(mut self, page_index: u32, page_size: u32) -> Self {
        self.page_index = Some(page_index);
        self.page_size = Some(page_size);
        self
    }
}

/// Build the query pairs for a project activity search.
///
/// `project` is always sent. `category`, `p` and `ps` are sent only when the
/// matching option is set to a non-empty string or a non-zero number.
#[must_use]
pub fn activity_query(project: &str, options: Option<&ActivityOptions>) -> Vec<(&'static str, String)> {
    let mut query = vec![("project", project.to_owned())];
    let Some(options) = options else {
        return query;
    };

    if let Some(category) = options.category.as_deref().filter(|c| !c.is_empty()) {
        query.push(("category", category.to_owned()));
    }
    if let Some(page_index) = options.page_index.filter(|p| *p != 0) {
        query.push(("p", page_index.to_string()));
    }
    if let Some(page_size) = options.page_size.filter(|ps| *ps != 0) {
        query.push(("ps", page_size.to_string()));
    }
    query
}

// =============================================================================
// ACTIVITY RESPONSE
// =============================================================================

/// Paginated response of the project analyses search.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectActivityResponse {
    pub analyses: Vec<Analysis>,
    pub paging: Paging,
}

impl ProjectActivityResponse {
    /// Whether more pages remain after the one described by `paging`.
    #[must_use]
    pub fn has_more(&self) -> bool {
        u64::from(self.paging.page_index) * u64::from(self.paging.page_size) < self.paging.total
    }
}

/// Paging metadata attached to list responses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paging {
    pub total: u64,
    pub page_index: u32,
    pub page_size: u32,
}

/// One recorded analysis in the project activity timeline.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub key: String,
    /// Analysis date as sent by the server (ISO-8601).
    pub date: String,
    #[serde(default)]
    pub events: Vec<Event>,
}

/// An event attached to an analysis.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Event {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    pub category: EventCategory,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Discriminator of an [`Event`].
///
/// Unknown categories are kept verbatim in [`EventCategory::Custom`] so that
/// newer servers do not break decoding.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EventCategory {
    Version,
    QualityGate,
    QualityProfile,
    Other,
    Custom(String),
}

impl EventCategory {
    /// Wire spelling of the category, e.g. `"VERSION"`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Version => "VERSION",
            Self::QualityGate => "QUALITY_GATE",
            Self::QualityProfile => "QUALITY_PROFILE",
            Self::Other => "OTHER",
            Self::Custom(raw) => raw,
        }
    }
}

impl From<String> for EventCategory {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "VERSION" => Self::Version,
            "QUALITY_GATE" => Self::QualityGate,
            "QUALITY_PROFILE" => Self::QualityProfile,
            "OTHER" => Self::Other,
            _ => Self::Custom(raw),
        }
    }
}

impl From<EventCategory> for String {
    fn from(category: EventCategory) -> Self {
        match category {
            EventCategory::Custom(raw) => raw,
            known => known.as_str().to_owned(),
        }
    }
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// IDENTITY PROVIDERS
// =============================================================================

/// An external authentication source offered on the login page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityProvider {
    pub key: String,
    pub name: String,
    #[serde(default)]
    pub icon_path: Option<String>,
    #[serde(default)]
    pub background_color: Option<String>,
}

/// Response body of [`IDENTITY_PROVIDERS`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityProvidersResponse {
    pub identity_providers: Vec<IdentityProvider>,
}
