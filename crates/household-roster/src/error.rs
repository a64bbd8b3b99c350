//! Roster Errors

use crate::roster::MemberId;
use crate::validate::ValidationErrors;

/// Common result type for roster operations
pub type RosterResult<T> = Result<T, RosterError>;

/// Errors raised by the household roster
#[derive(Debug, Clone, PartialEq)]
pub enum RosterError {
    /// The form failed validation; the roster was not touched
    Invalid(ValidationErrors),
    /// No member with this id is in the roster
    NotFound(MemberId),
    /// The form schema is malformed or does not match the draft
    Schema(String),
    /// The payload could not be rendered as JSON
    Serialize(String),
}

impl std::fmt::Display for RosterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RosterError::Invalid(errors) => write!(f, "{}", errors),
            RosterError::NotFound(id) => write!(f, "Member not found: {}", id),
            RosterError::Schema(msg) => write!(f, "Invalid schema: {}", msg),
            RosterError::Serialize(msg) => write!(f, "Serialization failed: {}", msg),
        }
    }
}

impl std::error::Error for RosterError {}

impl From<ValidationErrors> for RosterError {
    fn from(errors: ValidationErrors) -> Self {
        RosterError::Invalid(errors)
    }
}

impl From<serde_json::Error> for RosterError {
    fn from(err: serde_json::Error) -> Self {
        RosterError::Serialize(err.to_string())
    }
}
