//! Event row of the project activity timeline.
//!
//! DESIGN
//! ======
//! Rendering dispatches on the event category: `VERSION` events are handed
//! to [`VersionEvent`] as a whole, every other category gets the generic
//! "label: name" row. The choice is made by [`EventView::for_event`] so it
//! can be checked without rendering.

#[cfg(test)]
#[path = "event_test.rs"]
mod event_test;

use leptos::prelude::*;
use wire::{Event, EventCategory};

use super::tooltips::Tooltips;
use super::version_event::VersionEvent;
use crate::util::l10n::translate;

/// Which view renders an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventView {
    Version,
    Generic,
}

impl EventView {
    #[must_use]
    pub fn for_event(event: &Event) -> Self {
        match event.category {
            EventCategory::Version => Self::Version,
            EventCategory::QualityGate
            | EventCategory::QualityProfile
            | EventCategory::Other
            | EventCategory::Custom(_) => Self::Generic,
        }
    }
}

/// Message keys of the category label.
fn category_label_keys(category: &EventCategory) -> [&str; 2] {
    ["event.category", category.as_str()]
}

#[component]
pub fn ActivityEvent(event: Event) -> impl IntoView {
    match EventView::for_event(&event) {
        EventView::Version => view! { <VersionEvent event=event/> }.into_any(),
        EventView::Generic => {
            let label = translate(&category_label_keys(&event.category));
            let Event { name, description, .. } = event;
            view! {
                <Tooltips>
                    <div class="project-activity-event">
                        <span class="note">{label}":"</span>
                        " "
                        <strong title=description data-toggle="tooltip">{name}</strong>
                    </div>
                </Tooltips>
            }
            .into_any()
        }
    }
}
