//! Account form values and the field names used to key errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Snapshot of every value the user has entered into the account form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormData {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub accept_terms: bool,
}

/// Names of the form inputs, plus `Api` for submission failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    FirstName,
    LastName,
    Email,
    Password,
    ConfirmPassword,
    AcceptTerms,
    Api,
}

impl FieldName {
    /// Every input rendered by the form, in display order
    pub const INPUTS: [FieldName; 6] = [
        FieldName::FirstName,
        FieldName::LastName,
        FieldName::Email,
        FieldName::Password,
        FieldName::ConfirmPassword,
        FieldName::AcceptTerms,
    ];

    /// Key used when the field is serialized or logged
    pub fn key(&self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
            Self::AcceptTerms => "acceptTerms",
            Self::Api => "api",
        }
    }

    /// Human label shown next to the input
    pub fn label(&self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Email => "Email",
            Self::Password => "Password",
            Self::ConfirmPassword => "Confirm Password",
            Self::AcceptTerms => "I accept the terms and conditions",
            Self::Api => "Account Service",
        }
    }

    pub fn is_checkbox(&self) -> bool {
        matches!(self, Self::AcceptTerms)
    }

    pub fn is_secret(&self) -> bool {
        matches!(self, Self::Password | Self::ConfirmPassword)
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A raw value coming from an input change event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldInput {
    /// Text-like inputs (text, email, password)
    Text(String),
    /// Checkbox inputs
    Checked(bool),
}

impl FormData {
    /// Return a copy with one field replaced and the rest untouched.
    ///
    /// Checkbox fields only accept `Checked`, text fields only accept `Text`;
    /// a mismatched kind (or `Api`) leaves the data as it was.
    pub fn with_change(&self, field: FieldName, input: FieldInput) -> FormData {
        let mut next = self.clone();
        match (field, input) {
            (FieldName::FirstName, FieldInput::Text(v)) => next.first_name = v,
            (FieldName::LastName, FieldInput::Text(v)) => next.last_name = v,
            (FieldName::Email, FieldInput::Text(v)) => next.email = v,
            (FieldName::Password, FieldInput::Text(v)) => next.password = v,
            (FieldName::ConfirmPassword, FieldInput::Text(v)) => next.confirm_password = v,
            (FieldName::AcceptTerms, FieldInput::Checked(v)) => next.accept_terms = v,
            (field, input) => {
                tracing::debug!("Ignoring {input:?} for field {field}");
            }
        }
        next
    }

    /// Current text of a text field (empty for the checkbox and `Api`)
    pub fn text(&self, field: FieldName) -> &str {
        match field {
            FieldName::FirstName => &self.first_name,
            FieldName::LastName => &self.last_name,
            FieldName::Email => &self.email,
            FieldName::Password => &self.password,
            FieldName::ConfirmPassword => &self.confirm_password,
            FieldName::AcceptTerms | FieldName::Api => "",
        }
    }
}
