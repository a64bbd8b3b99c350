//! Household Form Component
//!
//! Member form with an Add button (non-submitting) and a Submit button.

use leptos::prelude::*;

use household_roster::RosterError;

use crate::components::FieldInput;
use crate::context::BuilderContext;
use crate::dialog;
use crate::store::{store_add_member, store_submit, use_household_store};

#[component]
pub fn HouseholdForm() -> impl IntoView {
    let ctx = use_context::<BuilderContext>().expect("BuilderContext should be provided");
    let store = use_household_store();

    let add_member = move |_| {
        match ctx.with_draft(|draft| store_add_member(&store, draft)) {
            Ok(id) => log::debug!("[FORM] Member {} added, form cleared", id),
            Err(RosterError::Invalid(errors)) => dialog::alert(&errors.message()),
            Err(e) => log::error!("[FORM] Add failed: {}", e),
        }
    };

    // Never let the browser submit; the payload is only displayed
    let submit_household = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if let Err(e) = ctx.with_draft(|draft| store_submit(&store, draft)) {
            log::error!("[SUBMIT] {}", e);
        }
    };

    let fields = ctx.schema.with_value(|schema| schema.fields.clone());

    view! {
        <form id="form" on:submit=submit_household>
            {fields.into_iter().map(|field| view! { <FieldInput field=field /> }).collect_view()}
            <div>
                <button type="button" class="add" on:click=add_member>"add"</button>
            </div>
            <div>
                <button type="submit">"submit"</button>
            </div>
        </form>
    }
}
