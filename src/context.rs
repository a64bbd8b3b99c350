//! Builder Context
//!
//! Form draft signals provided via Leptos Context API.

use leptos::prelude::*;

use household_roster::{FieldValue, FormDraft, FormSchema};

/// Form state shared by the inputs and the form buttons
#[derive(Clone, Copy)]
pub struct BuilderContext {
    /// Current form values - read
    pub draft: ReadSignal<FormDraft>,
    /// Current form values - write
    set_draft: WriteSignal<FormDraft>,
    /// Field definitions the form was rendered from
    pub schema: StoredValue<FormSchema>,
}

impl BuilderContext {
    pub fn new(draft: (ReadSignal<FormDraft>, WriteSignal<FormDraft>), schema: FormSchema) -> Self {
        Self {
            draft: draft.0,
            set_draft: draft.1,
            schema: StoredValue::new(schema),
        }
    }

    /// Store a new value for one input
    pub fn set_field(&self, name: &str, value: FieldValue) {
        self.set_draft.update(|draft| {
            if let Err(e) = draft.set(name, value) {
                log::warn!("[FORM] {}", e);
            }
        });
    }

    /// Run a roster operation against a copy of the draft, then publish
    /// whatever the operation left in it
    pub fn with_draft<T>(&self, op: impl FnOnce(&mut FormDraft) -> T) -> T {
        let mut draft = self.draft.get_untracked();
        let result = op(&mut draft);
        self.set_draft.set(draft);
        result
    }
}
