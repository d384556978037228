//! Form field value objects

use crate::validation::{FieldName, FormData};

/// Mask character for secret fields
pub const MASK_CHAR: char = '•';

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Checked(bool),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// A single rendered input: its name, label and current value
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: FieldName,
    pub label: &'static str,
    pub value: FieldValue,
    pub is_secret: bool,
}

impl FormField {
    /// Build the field view for `name` from the current form data
    pub fn from_data(name: FieldName, data: &FormData) -> Self {
        let value = if name.is_checkbox() {
            FieldValue::Checked(data.accept_terms)
        } else {
            FieldValue::Text(data.text(name).to_string())
        };
        Self {
            name,
            label: name.label(),
            value,
            is_secret: name.is_secret(),
        }
    }

    pub fn is_checkbox(&self) -> bool {
        matches!(self.value, FieldValue::Checked(_))
    }

    /// Get the display value for rendering
    pub fn display_value(&self, reveal: bool) -> String {
        match &self.value {
            FieldValue::Text(s) if self.is_secret && !reveal => {
                MASK_CHAR.to_string().repeat(s.chars().count())
            }
            FieldValue::Text(s) => s.clone(),
            FieldValue::Checked(true) => "[x]".to_string(),
            FieldValue::Checked(false) => "[ ]".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn data() -> FormData {
        FormData {
            first_name: "Ada".to_string(),
            password: "sécret".to_string(),
            accept_terms: true,
            ..FormData::default()
        }
    }

    #[test]
    fn test_text_field_from_data() {
        let field = FormField::from_data(FieldName::FirstName, &data());
        assert_eq!(field.value, FieldValue::Text("Ada".to_string()));
        assert_eq!(field.label, "First Name");
        assert!(!field.is_secret);
        assert!(!field.is_checkbox());
    }

    #[test]
    fn test_password_is_masked_per_character() {
        let field = FormField::from_data(FieldName::Password, &data());
        assert!(field.is_secret);
        assert_eq!(field.display_value(false), "••••••");
        assert_eq!(field.display_value(true), "sécret");
    }

    #[test]
    fn test_checkbox_display() {
        let field = FormField::from_data(FieldName::AcceptTerms, &data());
        assert!(field.is_checkbox());
        assert_eq!(field.value, FieldValue::Checked(true));
        assert_eq!(field.display_value(false), "[x]");

        let unchecked = FormField::from_data(FieldName::AcceptTerms, &FormData::default());
        assert_eq!(unchecked.display_value(false), "[ ]");
        assert_eq!(unchecked.value, FieldValue::Checked(false));
    }

    #[test]
    fn test_default_value_is_empty_text() {
        assert_eq!(FieldValue::default(), FieldValue::Text(String::new()));
    }
}
