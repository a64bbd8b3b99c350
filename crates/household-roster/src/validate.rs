//! Form Validation
//!
//! Rules checked before a member row is added. Every rule runs; failures are
//! collected into one message.

use std::fmt;

use crate::draft::FormDraft;

pub const AGE_FIELD: &str = "age";
pub const RELATIONSHIP_FIELD: &str = "rel";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    MissingAge,
    /// Age below zero. Zero itself is accepted even though the message reads
    /// "greater than 0".
    NegativeAge,
    MissingRelationship,
}

impl ValidationError {
    pub fn message(&self) -> &'static str {
        match self {
            ValidationError::MissingAge => "An age must be provided.",
            ValidationError::NegativeAge => "Age must be greater than 0.",
            ValidationError::MissingRelationship => "A relationship must be selected.",
        }
    }

    // The relationship message closes the alert without a trailing newline.
    fn line_break(&self) -> &'static str {
        match self {
            ValidationError::MissingRelationship => "",
            _ => "\n",
        }
    }
}

/// All failed rules, in rule order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, error: ValidationError) -> bool {
        self.0.contains(&error)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.0.iter()
    }

    /// Combined alert text
    pub fn message(&self) -> String {
        self.0
            .iter()
            .map(|e| format!("{}{}", e.message(), e.line_break()))
            .collect()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// Check the draft's age and relationship
pub fn validate(draft: &FormDraft) -> Result<(), ValidationErrors> {
    let mut errors = Vec::new();

    let age = draft.text(AGE_FIELD);
    if age.is_empty() {
        errors.push(ValidationError::MissingAge);
    }
    if coerce_number(age).is_some_and(|n| n < 0.0) {
        errors.push(ValidationError::NegativeAge);
    }
    if draft.text(RELATIONSHIP_FIELD).is_empty() {
        errors.push(ValidationError::MissingRelationship);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors(errors))
    }
}

/// Whitespace stripped before a browser reads a number: Unicode spaces and
/// line terminators plus the BOM, but not NEL.
fn is_js_whitespace(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{85}')
}

/// Loose numeric reading of form text, the way a browser compares a form
/// string against a number: surrounding whitespace is ignored, blank text is
/// zero, `Infinity` and `0x`/`0o`/`0b` literals are accepted, anything else
/// that is not a plain decimal is `None` (NaN).
pub fn coerce_number(text: &str) -> Option<f64> {
    let text = text.trim_matches(is_js_whitespace);
    if text.is_empty() {
        return Some(0.0);
    }
    match text {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }

    let radix = match text.get(..2) {
        Some("0x") | Some("0X") => Some(16),
        Some("0o") | Some("0O") => Some(8),
        Some("0b") | Some("0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return u64::from_str_radix(&text[2..], radix).ok().map(|n| n as f64);
    }

    // Rust also parses "inf" / "nan", which a browser does not
    if text.chars().any(|c| c.is_alphabetic() && c != 'e' && c != 'E') {
        return None;
    }
    text.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FormSchema;
    use crate::value::FieldValue;

    fn draft(age: &str, rel: &str) -> FormDraft {
        let mut draft = FormDraft::new(&FormSchema::default());
        draft.set(AGE_FIELD, FieldValue::text(age)).unwrap();
        draft.set(RELATIONSHIP_FIELD, FieldValue::text(rel)).unwrap();
        draft
    }

    #[test]
    fn test_missing_age() {
        let errors = validate(&draft("", "self")).unwrap_err();
        assert!(errors.message().contains("An age must be provided."));
        assert!(!errors.contains(ValidationError::NegativeAge));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_negative_age() {
        let errors = validate(&draft("-1", "self")).unwrap_err();
        assert!(errors.message().contains("Age must be greater than 0."));
        assert!(!errors.contains(ValidationError::MissingAge));
    }

    #[test]
    fn test_zero_age_passes() {
        assert!(validate(&draft("0", "Self")).is_ok());
        assert!(validate(&draft("-0", "Self")).is_ok());
    }

    #[test]
    fn test_missing_relationship() {
        let errors = validate(&draft("34", "")).unwrap_err();
        assert_eq!(errors.message(), "A relationship must be selected.");
    }

    #[test]
    fn test_errors_are_collected() {
        let errors = validate(&draft("", "")).unwrap_err();
        assert_eq!(
            errors.message(),
            "An age must be provided.\nA relationship must be selected."
        );

        let errors = validate(&draft("-5", "")).unwrap_err();
        assert_eq!(
            errors.message(),
            "Age must be greater than 0.\nA relationship must be selected."
        );
    }

    #[test]
    fn test_non_numeric_age_is_not_negative() {
        assert!(validate(&draft("abc", "child")).is_ok());
        assert!(validate(&draft("-inf", "child")).is_ok());
    }

    #[test]
    fn test_coerce_number() {
        assert_eq!(coerce_number(""), Some(0.0));
        assert_eq!(coerce_number("  "), Some(0.0));
        assert_eq!(coerce_number(" 42 "), Some(42.0));
        assert_eq!(coerce_number("-1.5"), Some(-1.5));
        assert_eq!(coerce_number("1e2"), Some(100.0));
        assert_eq!(coerce_number("0x10"), Some(16.0));
        assert_eq!(coerce_number("-Infinity"), Some(f64::NEG_INFINITY));
        assert_eq!(coerce_number("nan"), None);
        assert_eq!(coerce_number("12 years"), None);
    }

    #[test]
    fn test_coerce_number_browser_whitespace() {
        assert_eq!(coerce_number("\u{FEFF}-1"), Some(-1.0));
        assert_eq!(coerce_number("\u{00A0}5\u{2028}"), Some(5.0));
        assert_eq!(coerce_number("\u{85}1"), None);
        assert!(validate(&draft("\u{FEFF}-1", "self"))
            .unwrap_err()
            .contains(ValidationError::NegativeAge));
    }
}
