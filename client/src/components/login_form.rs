//! Login form: identity provider links plus login/password fields.

#[cfg(test)]
#[path = "login_form_test.rs"]
mod login_form_test;

use leptos::prelude::*;
use wire::IdentityProvider;

use crate::util::config::AppConfig;
use crate::util::l10n::translate;

/// Entry point of the external authentication flow for `provider`.
fn provider_init_url(base_url: &str, provider: &IdentityProvider) -> String {
    format!("{base_url}/sessions/init/{}", provider.key)
}

/// Inline style of a provider button, empty when no color is configured.
fn provider_style(provider: &IdentityProvider) -> String {
    provider
        .background_color
        .as_deref()
        .map(|color| format!("background-color: {color}"))
        .unwrap_or_default()
}

/// Credentials exactly as typed. Empty fields are stopped by the inputs'
/// `required` attribute, not here.
fn credentials(login: &str, password: &str) -> (String, String) {
    (login.to_owned(), password.to_owned())
}

#[component]
pub fn LoginForm(
    identity_providers: Vec<IdentityProvider>,
    /// Receives `(login, password)` on submit.
    on_submit: Callback<(String, String)>,
) -> impl IntoView {
    let base_url = use_context::<AppConfig>().unwrap_or_default().base_url;
    let login = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(credentials(&login.get_untracked(), &password.get_untracked()));
    };

    let has_providers = !identity_providers.is_empty();
    let providers = identity_providers
        .into_iter()
        .map(|provider| {
            let href = provider_init_url(&base_url, &provider);
            let style = provider_style(&provider);
            let icon = provider.icon_path.clone().map(|src| format!("{base_url}{src}"));
            let IdentityProvider { name, .. } = provider;
            view! {
                <li>
                    <a class="oauth-provider" href=href style=style title=format!("{} {name}", translate(&["login.login_with_x"]))>
                        {icon.map(|src| view! { <img alt=name.clone() width="20" height="20" src=src/> })}
                        <span>{name.clone()}</span>
                    </a>
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="login-page">
            <h1 class="login-title">{translate(&["sessions.log_in"])}</h1>
            {has_providers.then(|| view! {
                <section class="oauth-providers">
                    <ul>{providers}</ul>
                </section>
            })}
            <form class="login-form" on:submit=on_form_submit>
                <div class="big-spacer-bottom">
                    <label for="login">{translate(&["login.login"])}</label>
                    <input
                        id="login"
                        name="login"
                        type="text"
                        autofocus=true
                        required=true
                        prop:value=move || login.get()
                        on:input=move |ev| login.set(event_target_value(&ev))
                    />
                </div>
                <div class="big-spacer-bottom">
                    <label for="password">{translate(&["login.password"])}</label>
                    <input
                        id="password"
                        name="password"
                        type="password"
                        required=true
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </div>
                <button class="button" type="submit">{translate(&["sessions.log_in"])}</button>
            </form>
        </div>
    }
}
