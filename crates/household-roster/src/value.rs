//! Field Values

use serde::Serialize;
use std::fmt;

/// Value captured from one form input.
///
/// Checkboxes produce `Flag`, every other input kind produces `Text` holding
/// the raw text. The variant is kept all the way to serialization so a flag
/// is written as a JSON boolean, never as the string `"true"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    /// Text content, or "" for a flag
    pub fn as_text(&self) -> &str {
        match self {
            FieldValue::Text(text) => text,
            FieldValue::Flag(_) => "",
        }
    }

    /// Checked state, or false for text
    pub fn as_flag(&self) -> bool {
        matches!(self, FieldValue::Flag(true))
    }
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// Table cell rendering
impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(text) => f.write_str(text),
            FieldValue::Flag(checked) => write!(f, "{}", checked),
        }
    }
}
