//! Form state management for the Create Account form

use super::field::FormField;
use crate::validation::{score, ErrorMap, FieldInput, FieldName, FormData, PasswordStrength};

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_field(&self, index: usize) -> Option<FormField>;
}

/// Focus slot of the "Sign in" link (after the six inputs)
pub const SIGN_IN_SLOT: usize = 6;
/// Focus slot of the "Create Account" button
pub const SUBMIT_SLOT: usize = 7;

/// Create Account form: current values, last validation result and focus
#[derive(Debug, Clone, Default)]
pub struct AccountForm {
    data: FormData,
    /// Errors from the last submit attempt
    pub errors: ErrorMap,
    pub active_field_index: usize,
    /// Show secret fields in clear text
    pub reveal_passwords: bool,
}

impl AccountForm {
    pub fn new(reveal_passwords: bool) -> Self {
        Self {
            reveal_passwords,
            ..Self::default()
        }
    }

    /// Current values
    pub fn data(&self) -> &FormData {
        &self.data
    }

    /// Input change event: replace the record with one field updated
    pub fn apply(&mut self, field: FieldName, input: FieldInput) {
        self.data = self.data.with_change(field, input);
    }

    /// The input under focus, if focus is on an input rather than a button
    pub fn active_input(&self) -> Option<FieldName> {
        FieldName::INPUTS.get(self.active_field_index).copied()
    }

    pub fn is_submit_active(&self) -> bool {
        self.active_field_index == SUBMIT_SLOT
    }

    pub fn is_sign_in_active(&self) -> bool {
        self.active_field_index == SIGN_IN_SLOT
    }

    /// Append a character to the focused text input
    pub fn input_char(&mut self, c: char) {
        match self.active_input() {
            Some(FieldName::AcceptTerms) => {
                if c == ' ' {
                    self.toggle_checkbox();
                }
            }
            Some(field) => {
                let mut value = self.data.text(field).to_string();
                value.push(c);
                self.apply(field, FieldInput::Text(value));
            }
            None => {}
        }
    }

    /// Remove the last character of the focused text input
    pub fn backspace(&mut self) {
        if let Some(field) = self.active_input().filter(|f| !f.is_checkbox()) {
            let mut value = self.data.text(field).to_string();
            if value.pop().is_some() {
                self.apply(field, FieldInput::Text(value));
            }
        }
    }

    /// Flip the accept-terms checkbox
    pub fn toggle_checkbox(&mut self) {
        let checked = !self.data.accept_terms;
        self.apply(FieldName::AcceptTerms, FieldInput::Checked(checked));
    }

    pub fn toggle_reveal(&mut self) {
        self.reveal_passwords = !self.reveal_passwords;
    }

    /// Live strength of the current password
    pub fn strength(&self) -> PasswordStrength {
        score(&self.data.password)
    }

    pub fn error_for(&self, field: FieldName) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Record a failed submission under the `api` key
    pub fn record_api_error(&mut self, message: impl Into<String>) {
        self.errors.insert(FieldName::Api, message.into());
    }

    /// Back to an empty form, keeping display preferences
    pub fn reset(&mut self) {
        *self = Self::new(self.reveal_passwords);
    }
}

impl Form for AccountForm {
    fn field_count(&self) -> usize {
        8 // six inputs, sign-in link, submit button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.field_count() - 1);
    }
    fn get_field(&self, index: usize) -> Option<FormField> {
        FieldName::INPUTS
            .get(index)
            .map(|name| FormField::from_data(*name, &self.data))
    }
}
