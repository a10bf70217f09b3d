//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{login::LoginPage, project_activity::ProjectActivityPage};
use crate::util::config::AppConfig;
use crate::util::l10n::Messages;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions, config: AppConfig) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name="base-url" content=config.base_url.clone()/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App config/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides configuration and messages to every page and sets up routing.
#[component]
pub fn App(#[prop(optional)] config: Option<AppConfig>) -> impl IntoView {
    provide_meta_context();

    let config = config.unwrap_or_else(current_config);
    provide_context(config);
    provide_context(Messages::english());

    view! {
        <Stylesheet id="leptos" href="/pkg/sonar-web.css"/>
        <Title text="SonarQube"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=(StaticSegment("sessions"), StaticSegment("new")) view=LoginPage/>
                <Route path=(StaticSegment("project"), StaticSegment("activity")) view=ProjectActivityPage/>
            </Routes>
        </Router>
    }
}

fn current_config() -> AppConfig {
    #[cfg(feature = "hydrate")]
    {
        AppConfig::from_document()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        AppConfig::default()
    }
}
