//! Project activity page: analyses timeline with their events.

#[cfg(test)]
#[path = "project_activity_test.rs"]
mod project_activity_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;
use wire::Analysis;

use crate::components::event::ActivityEvent;
use crate::net::api::{BrowserTransport, get_project_activity};
use crate::state::activity::ActivityState;
use crate::util::config::AppConfig;
use crate::util::l10n::translate;
use crate::util::task::{TaskSlot, spawn_detached};

/// Categories offered by the event filter, in display order.
const FILTER_CATEGORIES: [&str; 4] = ["VERSION", "QUALITY_GATE", "QUALITY_PROFILE", "OTHER"];

#[component]
fn AnalysisItem(analysis: Analysis) -> impl IntoView {
    let Analysis { date, events, .. } = analysis;
    view! {
        <li class="project-activity-analysis">
            <div class="project-activity-time">{date}</div>
            <ul class="project-activity-events">
                {events.into_iter().map(|event| view! { <li><ActivityEvent event=event/></li> }).collect_view()}
            </ul>
        </li>
    }
}

/// `/project/activity?id=<project>` route.
#[component]
pub fn ProjectActivityPage() -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let transport = BrowserTransport::new(config.base_url);
    let project = use_query_map().with_untracked(|query| query.get("id")).unwrap_or_default();
    let state = RwSignal::new(ActivityState::default());
    let in_flight = StoredValue::new(TaskSlot::default());
    on_cleanup(move || {
        if in_flight.try_with_value(TaskSlot::abort).is_none() {
            log::debug!("activity task slot already disposed");
        }
    });

    let load_next = Callback::new(move |()| {
        let options = state.with_untracked(ActivityState::next_page);
        state.update(ActivityState::start);
        let transport = transport.clone();
        let project = project.clone();
        let fetch = async move {
            match get_project_activity(&transport, &project, Some(&options)).await {
                Ok(response) => state.update(|s| s.apply(&options, response)),
                Err(err) => {
                    log::warn!("project activity fetch failed: {err}");
                    state.update(|s| s.fail(&options, err.to_string()));
                }
            }
        };
        let task = spawn_detached(fetch);
        in_flight.update_value(|slot| slot.replace(task));
    });

    load_next.run(());

    let on_filter = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        state.update(|s| s.set_category(Some(value)));
        load_next.run(());
    };

    view! {
        <div class="page page-limited">
            <header class="page-header">
                <h1 class="page-title">{translate(&["project_activity.page"])}</h1>
                <select
                    class="input-medium"
                    aria-label=translate(&["project_activity.filter_events"])
                    on:change=on_filter
                >
                    <option value="">{translate(&["project_activity.all_events"])}</option>
                    {FILTER_CATEGORIES
                        .iter()
                        .map(|category| {
                            view! { <option value=*category>{translate(&["event.category", *category])}</option> }
                        })
                        .collect_view()}
                </select>
            </header>
            <ul class="project-activity-days-list">
                <For
                    each=move || state.with(|s| s.analyses.clone())
                    key=|analysis| analysis.key.clone()
                    children=|analysis| view! { <AnalysisItem analysis=analysis/> }
                />
            </ul>
            {move || state.with(|s| s.error.clone()).map(|error| view! { <p class="alert alert-danger">{error}</p> })}
            <Show when=move || state.with(ActivityState::has_more)>
                <footer class="spacer-top note text-center">
                    <button
                        class="button-link"
                        disabled=move || state.with(|s| s.loading)
                        on:click=move |_| load_next.run(())
                    >
                        {translate(&["show_more"])}
                    </button>
                </footer>
            </Show>
        </div>
    }
}
