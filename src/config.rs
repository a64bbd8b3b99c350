//! Form Configuration
//!
//! The host page may override the default form with a JSON schema:
//! `<script type="application/json" id="household-schema">{"fields":[...]}</script>`

use household_roster::FormSchema;

const SCHEMA_ELEMENT_ID: &str = "household-schema";

/// Schema from the host page, falling back to the default form
pub fn load_schema() -> FormSchema {
    let Some(json) = read_schema_text() else {
        log::debug!("[CONFIG] No #{} element, using default form", SCHEMA_ELEMENT_ID);
        return FormSchema::default();
    };
    match FormSchema::from_json(&json) {
        Ok(schema) => {
            log::info!("[CONFIG] Loaded form with {} fields", schema.len());
            schema
        }
        Err(e) => {
            log::warn!("[CONFIG] {}, using default form", e);
            FormSchema::default()
        }
    }
}

fn read_schema_text() -> Option<String> {
    web_sys::window()?
        .document()?
        .get_element_by_id(SCHEMA_ELEMENT_ID)?
        .text_content()
        .filter(|text| !text.trim().is_empty())
}
