//! Tooltip scope wrapper.

use leptos::prelude::*;

/// Marks a subtree whose `data-toggle="tooltip"` elements show their `title`
/// as a styled tooltip.
#[component]
pub fn Tooltips(children: Children) -> impl IntoView {
    view! { <div class="tooltips-container">{children()}</div> }
}
