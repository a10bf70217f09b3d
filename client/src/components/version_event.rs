//! Version badge for `VERSION` events.

use leptos::prelude::*;
use wire::Event;

use super::tooltips::Tooltips;

#[component]
pub fn VersionEvent(event: Event) -> impl IntoView {
    let Event { name, description, .. } = event;
    view! {
        <Tooltips>
            <div class="project-activity-event project-activity-version">
                <span
                    class="badge project-activity-version-badge"
                    title=description
                    data-toggle="tooltip"
                >
                    {name}
                </span>
            </div>
        </Tooltips>
    }
}
