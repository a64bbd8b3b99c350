//! Form Schema
//!
//! Explicit field definitions shared by the form, the table header and the
//! row builder, so all three agree on field order.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::{RosterError, RosterResult};
use crate::value::FieldValue;

/// Header tag of the trailing removal cell in every row
pub const REMOVE_COLUMN: &str = "remove";

/// One `<option>` of a select field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: &str, label: &str) -> Self {
        Self { value: value.to_string(), label: label.to_string() }
    }
}

/// Input kind of a field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Number,
    Checkbox,
    Select { options: Vec<SelectOption> },
}

/// A form input and the table column it becomes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDef {
    /// Input `name`; also the record key and the cell's header tag
    pub name: String,
    /// Visible label text; also the column header
    pub caption: String,
    pub kind: FieldKind,
}

impl FieldDef {
    pub fn new(name: &str, caption: &str, kind: FieldKind) -> Self {
        Self { name: name.to_string(), caption: caption.to_string(), kind }
    }

    /// Value the input holds after a form reset
    pub fn default_value(&self) -> FieldValue {
        match &self.kind {
            FieldKind::Checkbox => FieldValue::Flag(false),
            FieldKind::Select { options } => options
                .first()
                .map(|opt| FieldValue::text(opt.value.clone()))
                .unwrap_or_default(),
            FieldKind::Text | FieldKind::Number => FieldValue::default(),
        }
    }

    pub fn is_checkbox(&self) -> bool {
        matches!(self.kind, FieldKind::Checkbox)
    }
}

/// Ordered field definitions of the household form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSchema {
    pub fields: Vec<FieldDef>,
}

impl Default for FormSchema {
    fn default() -> Self {
        Self {
            fields: vec![
                FieldDef::new("age", "Age", FieldKind::Text),
                FieldDef::new(
                    "rel",
                    "Relationship",
                    FieldKind::Select {
                        options: vec![
                            SelectOption::new("", "---"),
                            SelectOption::new("self", "Self"),
                            SelectOption::new("spouse", "Spouse"),
                            SelectOption::new("child", "Child"),
                            SelectOption::new("parent", "Parent"),
                            SelectOption::new("grandparent", "Grandparent"),
                            SelectOption::new("other", "Other"),
                        ],
                    },
                ),
                FieldDef::new("smoker", "Smoker?", FieldKind::Checkbox),
            ],
        }
    }
}

impl FormSchema {
    /// Build a schema, rejecting empty field lists and blank or repeated names
    pub fn new(fields: Vec<FieldDef>) -> RosterResult<Self> {
        let schema = Self { fields };
        schema.check()?;
        Ok(schema)
    }

    /// Parse a schema from JSON, e.g. `{"fields":[{"name":"age","caption":"Age","kind":{"type":"text"}}]}`
    pub fn from_json(json: &str) -> RosterResult<Self> {
        let schema: FormSchema =
            serde_json::from_str(json).map_err(|e| RosterError::Schema(e.to_string()))?;
        schema.check()?;
        Ok(schema)
    }

    fn check(&self) -> RosterResult<()> {
        if self.fields.is_empty() {
            return Err(RosterError::Schema("form has no fields".to_string()));
        }
        let mut seen = HashSet::new();
        for field in &self.fields {
            if field.name.trim().is_empty() {
                return Err(RosterError::Schema(format!("field '{}' has no name", field.caption)));
            }
            if field.name == REMOVE_COLUMN {
                return Err(RosterError::Schema(format!("'{}' is reserved", REMOVE_COLUMN)));
            }
            if !seen.insert(field.name.as_str()) {
                return Err(RosterError::Schema(format!("duplicate field name '{}'", field.name)));
            }
        }
        Ok(())
    }

    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Header captions: one per field, then a blank one for the removal column
    pub fn header_cells(&self) -> Vec<String> {
        self.fields
            .iter()
            .map(|f| f.caption.clone())
            .chain(std::iter::once(String::new()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_schema_matches_page() {
        let schema = FormSchema::default();
        let names: Vec<_> = schema.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["age", "rel", "smoker"]);
        assert!(schema.field("smoker").unwrap().is_checkbox());
    }

    #[test]
    fn test_header_has_removal_column() {
        let schema = FormSchema::default();
        let headers = schema.header_cells();
        assert_eq!(headers.len(), schema.len() + 1);
        assert_eq!(headers, vec!["Age", "Relationship", "Smoker?", ""]);
    }

    #[test]
    fn test_default_values() {
        let schema = FormSchema::default();
        assert_eq!(schema.field("age").unwrap().default_value(), FieldValue::text(""));
        assert_eq!(schema.field("rel").unwrap().default_value(), FieldValue::text(""));
        assert_eq!(schema.field("smoker").unwrap().default_value(), FieldValue::Flag(false));
    }

    #[test]
    fn test_from_json() {
        let json = r#"{"fields":[
            {"name":"age","caption":"Age","kind":{"type":"number"}},
            {"name":"rel","caption":"Relationship","kind":{"type":"select","options":[{"value":"","label":"---"},{"value":"self","label":"Self"}]}},
            {"name":"pet","caption":"Has pet","kind":{"type":"checkbox"}}
        ]}"#;
        let schema = FormSchema::from_json(json).unwrap();
        assert_eq!(schema.len(), 3);
        assert_eq!(schema.fields[0].kind, FieldKind::Number);
        assert!(schema.field("pet").unwrap().is_checkbox());
    }

    #[test]
    fn test_rejects_duplicate_names() {
        let result = FormSchema::new(vec![
            FieldDef::new("age", "Age", FieldKind::Text),
            FieldDef::new("age", "Age again", FieldKind::Text),
        ]);
        assert!(matches!(result, Err(RosterError::Schema(_))));
    }

    #[test]
    fn test_rejects_empty_and_reserved() {
        assert!(FormSchema::new(vec![]).is_err());
        assert!(FormSchema::new(vec![FieldDef::new(" ", "Blank", FieldKind::Text)]).is_err());
        assert!(FormSchema::new(vec![FieldDef::new("remove", "Remove", FieldKind::Text)]).is_err());
        assert!(FormSchema::from_json("not json").is_err());
    }
}
