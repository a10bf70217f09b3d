//! Login page and the container that feeds the login form.
//!
//! The container fetches identity providers once per mount and renders
//! nothing until they arrive. The fetch is a scoped task: unmounting aborts
//! it, so a late response never touches the container's state.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use std::future::Future;
use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::login_form::LoginForm;
use crate::net::api::BrowserTransport;
use crate::net::session::{SessionApi, TransportSession};
use crate::state::login::{LoginFormState, redirect_target};
use crate::util::config::AppConfig;
use crate::util::task::spawn_scoped;

/// Fetch identity providers and hand the resulting state to `apply`.
fn load_providers<F>(api: Arc<dyn SessionApi>, apply: F) -> impl Future<Output = ()>
where
    F: Fn(LoginFormState) + 'static,
{
    async move {
        let result = api.identity_providers().await;
        apply(LoginFormState::Loading.resolve(result));
    }
}

/// Forward credentials to the session API.
///
/// Returns the redirect target on success. A rejected login is only logged:
/// the form stays as it is and the user gets no message.
#[cfg(any(test, feature = "hydrate"))]
async fn submit_login(
    api: &dyn SessionApi,
    login: &str,
    password: &str,
    return_to: Option<&str>,
    home_url: &str,
) -> Option<String> {
    match api.login(login, password).await {
        Ok(()) => Some(redirect_target(return_to, home_url)),
        Err(err) => {
            log::warn!("login rejected: {err}");
            None
        }
    }
}

#[component]
pub fn LoginFormContainer(api: Arc<dyn SessionApi>, return_to: Option<String>) -> impl IntoView {
    let home_url = use_context::<AppConfig>().unwrap_or_default().home_url();
    let state = RwSignal::new(LoginFormState::Loading);

    spawn_scoped(load_providers(api.clone(), move |next| state.set(next)));

    let on_submit = Callback::new(move |(login, password): (String, String)| {
        let api = api.clone();
        let return_to = return_to.clone();
        let home_url = home_url.clone();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Some(target) = submit_login(api.as_ref(), &login, &password, return_to.as_deref(), &home_url).await {
                crate::util::browser::redirect(&target);
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (api, return_to, home_url, login, password);
        }
    });

    move || {
        state.with(|s| {
            s.providers().map(|providers| {
                view! { <LoginForm identity_providers=providers.to_vec() on_submit=on_submit/> }
            })
        })
    }
}

/// `/sessions/new` route.
#[component]
pub fn LoginPage() -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let api: Arc<dyn SessionApi> = Arc::new(TransportSession::new(BrowserTransport::new(config.base_url)));
    let return_to = use_query_map().with_untracked(|query| query.get("return_to"));

    view! {
        <div class="page-wrapper-simple">
            <LoginFormContainer api=api return_to=return_to/>
        </div>
    }
}
