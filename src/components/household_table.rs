//! Household Table Component
//!
//! Renders the roster as a table. The header row is built once from the
//! field captions, plus an empty header over the removal column.

use leptos::prelude::*;

use crate::components::MemberRow;
use crate::store::{use_household_store, HouseholdStateStoreFields};

#[component]
pub fn HouseholdTable() -> impl IntoView {
    let store = use_household_store();
    let headers = store.roster().read_untracked().header_cells();

    view! {
        <table id="house" class="house">
            <thead>
                <tr>
                    {headers.into_iter().map(|caption| view! { <th>{caption}</th> }).collect_view()}
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || store.roster().read().members().to_vec()
                    key=|member| member.id()
                    children=move |member| view! { <MemberRow member=member /> }
                />
            </tbody>
        </table>
        <p class="member-count">{move || store.roster().read().summary()}</p>
    }
}
