use std::sync::Mutex;

use futures::executor::block_on;
use wire::EventCategory;

use super::*;
use crate::net::session::{SessionApi, TransportSession};

#[derive(Debug, Clone, PartialEq)]
struct Call {
    method: &'static str,
    path: String,
    params: Vec<(&'static str, String)>,
}

/// Records every call and answers with a canned result.
struct RecordingTransport {
    calls: Mutex<Vec<Call>>,
    reply: fn() -> Result<Value, ApiError>,
}

impl RecordingTransport {
    fn replying(reply: fn() -> Result<Value, ApiError>) -> Self {
        Self { calls: Mutex::new(Vec::new()), reply }
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.lock().expect("calls lock").clone()
    }
}

#[async_trait(?Send)]
impl JsonTransport for RecordingTransport {
    async fn get_json(&self, path: &str, query: &Params) -> Result<Value, ApiError> {
        self.calls.lock().expect("calls lock").push(Call { method: "GET", path: path.to_owned(), params: query.to_vec() });
        (self.reply)()
    }

    async fn post_form(&self, path: &str, form: &Params) -> Result<(), ApiError> {
        self.calls.lock().expect("calls lock").push(Call { method: "POST", path: path.to_owned(), params: form.to_vec() });
        (self.reply)().map(|_| ())
    }
}

fn activity_body() -> Result<Value, ApiError> {
    Ok(serde_json::json!({
        "analyses": [
            { "key": "A1", "date": "2016-10-27T12:21:15+0200", "events": [{ "category": "VERSION", "name": "1.0" }] }
        ],
        "paging": { "total": 1, "pageIndex": 1, "pageSize": 100 }
    }))
}

fn server_error() -> Result<Value, ApiError> {
    Err(ApiError::Status { path: wire::PROJECT_ANALYSES_SEARCH.to_owned(), status: 500 })
}

fn providers_body() -> Result<Value, ApiError> {
    Ok(serde_json::json!({ "identityProviders": [{ "key": "github", "name": "GitHub" }] }))
}

#[test]
fn project_activity_without_options_sends_only_project() {
    let transport = RecordingTransport::replying(activity_body);
    let response = block_on(get_project_activity(&transport, "my_project", None)).expect("response");

    assert_eq!(
        transport.calls(),
        vec![Call {
            method: "GET",
            path: "/api/project_analyses/search".to_owned(),
            params: vec![("project", "my_project".to_owned())],
        }]
    );
    assert_eq!(response.analyses[0].events[0].category, EventCategory::Version);
    assert_eq!(response.paging.page_size, 100);
}

#[test]
fn project_activity_forwards_truthy_options() {
    let transport = RecordingTransport::replying(activity_body);
    let options = ActivityOptions::default().with_category("VERSION").with_page(2, 50);
    block_on(get_project_activity(&transport, "my_project", Some(&options))).expect("response");

    let calls = transport.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(
        calls[0].params,
        vec![
            ("project", "my_project".to_owned()),
            ("category", "VERSION".to_owned()),
            ("p", "2".to_owned()),
            ("ps", "50".to_owned()),
        ]
    );
}

#[test]
fn project_activity_propagates_transport_failure_without_retry() {
    let transport = RecordingTransport::replying(server_error);
    let err = block_on(get_project_activity(&transport, "my_project", None)).expect_err("should fail");

    assert!(matches!(err, ApiError::Status { status: 500, .. }));
    assert_eq!(transport.calls().len(), 1);
}

#[test]
fn project_activity_rejects_malformed_body() {
    let transport = RecordingTransport::replying(|| Ok(serde_json::json!({ "analyses": [] })));
    let err = block_on(get_project_activity(&transport, "p", None)).expect_err("should fail");
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn identity_providers_are_unwrapped_from_response() {
    let transport = RecordingTransport::replying(providers_body);
    let providers = block_on(get_identity_providers(&transport)).expect("providers");

    assert_eq!(providers.len(), 1);
    assert_eq!(providers[0].key, "github");
    assert_eq!(transport.calls()[0].path, "/api/users/identity_providers");
    assert!(transport.calls()[0].params.is_empty());
}

#[test]
fn login_posts_credentials_as_form() {
    let transport = RecordingTransport::replying(|| Ok(Value::Null));
    block_on(login(&transport, "admin", "s3cret")).expect("login");

    assert_eq!(
        transport.calls(),
        vec![Call {
            method: "POST",
            path: "/api/authentication/login".to_owned(),
            params: vec![("login", "admin".to_owned()), ("password", "s3cret".to_owned())],
        }]
    );
}

#[test]
fn transport_session_delegates_to_endpoints() {
    let session = TransportSession::new(RecordingTransport::replying(providers_body));
    let providers = block_on(session.identity_providers()).expect("providers");
    assert_eq!(providers[0].name, "GitHub");
}

#[test]
fn endpoint_url_joins_base_without_double_slash() {
    assert_eq!(endpoint_url("http://host/sonar/", "/api/x"), "http://host/sonar/api/x");
    assert_eq!(endpoint_url("", "/api/x"), "/api/x");
}

#[test]
fn browser_transport_is_unavailable_off_browser() {
    #[cfg(not(feature = "hydrate"))]
    {
        let transport = BrowserTransport::new("");
        let err = block_on(transport.get_json("/api/x", &[])).expect_err("unavailable");
        assert!(matches!(err, ApiError::Unavailable));
    }
}

#[test]
fn api_error_messages_name_path_and_status() {
    let err = ApiError::Status { path: "/api/x".to_owned(), status: 401 };
    assert_eq!(err.to_string(), "/api/x returned HTTP 401");
}
