//! Member Row Component

use leptos::prelude::*;

use household_roster::{Member, REMOVE_COLUMN};

use crate::components::RemoveButton;
use crate::store::{store_remove_member, use_household_store};

/// One table row: a cell per captured field, then the removal cell
#[component]
pub fn MemberRow(member: Member) -> impl IntoView {
    let store = use_household_store();
    let id = member.id();

    let remove = Callback::new(move |_: ()| {
        if let Err(e) = store_remove_member(&store, id) {
            log::warn!("[TABLE] {}", e);
        }
    });

    view! {
        <tr>
            {member.cells().iter().map(|cell| view! {
                <td headers=cell.header.clone()>{cell.value.to_string()}</td>
            }).collect_view()}
            <td headers=REMOVE_COLUMN>
                <RemoveButton on_remove=remove />
            </td>
        </tr>
    }
}
