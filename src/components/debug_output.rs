//! Debug Output Component
//!
//! Shows the submitted JSON payload. Hidden until the first submit.

use leptos::prelude::*;

use crate::store::{use_household_store, HouseholdStateStoreFields};

#[component]
pub fn DebugOutput() -> impl IntoView {
    let store = use_household_store();
    let payload = move || store.payload().get();

    view! {
        <pre
            class="debug"
            style:display=move || if payload().is_some() { "inline-block" } else { "none" }
            style:white-space="pre-wrap"
        >
            {move || payload().unwrap_or_default()}
        </pre>
    }
}
