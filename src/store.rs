//! Household State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use household_roster::{FormDraft, FormSchema, MemberId, Roster, RosterResult};

/// Page state: the roster and the last submitted payload
#[derive(Clone, Debug, Store)]
pub struct HouseholdState {
    /// Member rows, rendered as the household table
    pub roster: Roster,
    /// JSON text shown in the debug area after a submit
    pub payload: Option<String>,
}

impl HouseholdState {
    pub fn new(schema: FormSchema) -> Self {
        Self {
            roster: Roster::new(schema),
            payload: None,
        }
    }
}

/// Type alias for the store
pub type HouseholdStore = Store<HouseholdState>;

/// Get the household store from context
pub fn use_household_store() -> HouseholdStore {
    expect_context::<HouseholdStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Validate the draft and append it as a new member row; clears the draft on success
pub fn store_add_member(store: &HouseholdStore, draft: &mut FormDraft) -> RosterResult<MemberId> {
    store.roster().write().add_and_reset(draft)
}

/// Remove a member row by ID
pub fn store_remove_member(store: &HouseholdStore, id: MemberId) -> RosterResult<()> {
    store.roster().write().remove(id).map(|_| ())
}

/// Serialize the current rows, publish them to the debug area and clear the draft
pub fn store_submit(store: &HouseholdStore, draft: &mut FormDraft) -> RosterResult<String> {
    let json = store.roster().read_untracked().submit(draft)?;
    *store.payload().write() = Some(json.clone());
    log::info!("[SUBMIT] Payload ready: {}", json);
    Ok(json)
}
