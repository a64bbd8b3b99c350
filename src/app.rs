//! Household Builder App
//!
//! Form on top, member table below it, payload output at the bottom.

use leptos::prelude::*;
use reactive_stores::Store;

use household_roster::FormDraft;

use crate::components::{DebugOutput, HouseholdForm, HouseholdTable};
use crate::config;
use crate::context::BuilderContext;
use crate::store::HouseholdState;

#[component]
pub fn App() -> impl IntoView {
    let schema = config::load_schema();

    // State
    let (draft, set_draft) = signal(FormDraft::new(&schema));
    let store = Store::new(HouseholdState::new(schema.clone()));

    // Provide context to all children
    provide_context(store);
    provide_context(BuilderContext::new((draft, set_draft), schema));

    view! {
        <h1>"Household builder"</h1>
        <div class="builder">
            <HouseholdForm />
            <HouseholdTable />
        </div>
        <DebugOutput />
    }
}
