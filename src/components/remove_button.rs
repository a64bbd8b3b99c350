//! Remove Button Component
//!
//! Row removal control. Removal is immediate, there is no confirmation step.

use leptos::prelude::*;

/// # Arguments
/// * `on_remove` - Callback that removes the owning row
#[component]
pub fn RemoveButton(#[prop(into)] on_remove: Callback<()>) -> impl IntoView {
    view! {
        <button
            type="button"
            class="remove"
            on:click=move |ev| {
                ev.stop_propagation();
                on_remove.run(());
            }
        >
            "Remove"
        </button>
    }
}
