//! UI Components
//!
//! Leptos components for the household form, table and payload output.

mod field_input;
mod household_form;
mod household_table;
mod member_row;
mod remove_button;
mod debug_output;

pub use field_input::FieldInput;
pub use household_form::HouseholdForm;
pub use household_table::HouseholdTable;
pub use member_row::MemberRow;
pub use remove_button::RemoveButton;
pub use debug_output::DebugOutput;
