//! Form Draft
//!
//! The values currently typed into the form, one per field in schema order.

use crate::error::{RosterError, RosterResult};
use crate::field::FormSchema;
use crate::value::FieldValue;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormDraft {
    values: Vec<(String, FieldValue)>,
}

impl FormDraft {
    /// Fresh draft with every field at its default
    pub fn new(schema: &FormSchema) -> Self {
        Self {
            values: schema
                .fields
                .iter()
                .map(|f| (f.name.clone(), f.default_value()))
                .collect(),
        }
    }

    /// Full form reset, not field by field
    pub fn reset(&mut self, schema: &FormSchema) {
        *self = Self::new(schema);
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.values.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    /// Text of a field ("" when missing or a checkbox)
    pub fn text(&self, name: &str) -> &str {
        self.get(name).map(FieldValue::as_text).unwrap_or("")
    }

    /// Checked state of a field (false when missing or not a checkbox)
    pub fn flag(&self, name: &str) -> bool {
        self.get(name).is_some_and(FieldValue::as_flag)
    }

    pub fn set(&mut self, name: &str, value: FieldValue) -> RosterResult<()> {
        let slot = self
            .values
            .iter_mut()
            .find(|(n, _)| n == name)
            .ok_or_else(|| RosterError::Schema(format!("unknown field '{}'", name)))?;
        slot.1 = value;
        Ok(())
    }

    pub fn values(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.values.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// True when every field holds its schema default
    pub fn is_pristine(&self, schema: &FormSchema) -> bool {
        *self == Self::new(schema)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_reset() {
        let schema = FormSchema::default();
        let mut draft = FormDraft::new(&schema);
        assert!(draft.is_pristine(&schema));

        draft.set("age", FieldValue::text("34")).unwrap();
        draft.set("rel", FieldValue::text("spouse")).unwrap();
        draft.set("smoker", FieldValue::Flag(true)).unwrap();
        assert_eq!(draft.text("age"), "34");
        assert!(draft.flag("smoker"));
        assert!(!draft.is_pristine(&schema));

        draft.reset(&schema);
        assert!(draft.is_pristine(&schema));
        assert_eq!(draft.text("age"), "");
        assert!(!draft.flag("smoker"));
    }

    #[test]
    fn test_unknown_field() {
        let mut draft = FormDraft::new(&FormSchema::default());
        assert!(matches!(
            draft.set("income", FieldValue::text("1")),
            Err(RosterError::Schema(_))
        ));
        assert_eq!(draft.text("income"), "");
    }

    #[test]
    fn test_values_follow_schema_order() {
        let draft = FormDraft::new(&FormSchema::default());
        let names: Vec<_> = draft.values().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["age", "rel", "smoker"]);
    }
}
