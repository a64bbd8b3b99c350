//! Household Roster
//!
//! Domain layer for the household builder:
//! - field: form schema (which inputs exist, in which order)
//! - draft: current form state, reset to defaults after every add
//! - validate: age / relationship rules checked before a row is added
//! - roster: ordered member rows, the single source of truth for the table
//! - payload: JSON rendering of the roster at submit time
//!
//! This crate has no browser dependencies so it can be tested natively.

mod error;
mod value;
mod field;
mod draft;
mod validate;
mod roster;
mod payload;


pub use error::{RosterError, RosterResult};
pub use value::FieldValue;
pub use field::{FieldDef, FieldKind, FormSchema, SelectOption, REMOVE_COLUMN};
pub use draft::FormDraft;
pub use validate::{coerce_number, validate, ValidationError, ValidationErrors, AGE_FIELD, RELATIONSHIP_FIELD};
pub use roster::{Cell, Member, MemberId, Roster};
pub use payload::serialize_members;
