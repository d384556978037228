//! Field validation rules for the account form

use super::form_data::{FieldName, FormData};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Failing fields mapped to the message shown next to them
pub type ErrorMap = BTreeMap<FieldName, String>;

/// Minimum password length, counted in UTF-16 code units
pub const MIN_PASSWORD_LEN: usize = 8;

pub const FIRST_NAME_REQUIRED: &str = "First name is required";
pub const LAST_NAME_REQUIRED: &str = "Last name is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Email is invalid";
pub const PASSWORD_REQUIRED: &str = "Password is required";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 8 characters";
pub const PASSWORDS_DO_NOT_MATCH: &str = "Passwords do not match";
pub const TERMS_REQUIRED: &str = "You must accept the terms and conditions";

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// Length as a browser input reports it: UTF-16 code units, so an
/// astral-plane character such as an emoji counts twice.
pub fn password_len(password: &str) -> usize {
    password.encode_utf16().count()
}

/// Empty after stripping whitespace and byte-order marks
fn is_blank(value: &str) -> bool {
    value
        .trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
        .is_empty()
}

/// Check an address against the `local@domain.tld` shape
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Run every rule against the form and collect the failures.
///
/// Rules are independent; one failing field never hides another.
pub fn validate(data: &FormData) -> ErrorMap {
    let mut errors = ErrorMap::new();

    if is_blank(&data.first_name) {
        errors.insert(FieldName::FirstName, FIRST_NAME_REQUIRED.to_string());
    }
    if is_blank(&data.last_name) {
        errors.insert(FieldName::LastName, LAST_NAME_REQUIRED.to_string());
    }

    if is_blank(&data.email) {
        errors.insert(FieldName::Email, EMAIL_REQUIRED.to_string());
    } else if !is_valid_email(&data.email) {
        errors.insert(FieldName::Email, EMAIL_INVALID.to_string());
    }

    if data.password.is_empty() {
        errors.insert(FieldName::Password, PASSWORD_REQUIRED.to_string());
    } else if password_len(&data.password) < MIN_PASSWORD_LEN {
        errors.insert(FieldName::Password, PASSWORD_TOO_SHORT.to_string());
    }

    if data.password != data.confirm_password {
        errors.insert(FieldName::ConfirmPassword, PASSWORDS_DO_NOT_MATCH.to_string());
    }

    if !data.accept_terms {
        errors.insert(FieldName::AcceptTerms, TERMS_REQUIRED.to_string());
    }

    errors
}

/// A form is valid when no rule failed
pub fn is_valid(errors: &ErrorMap) -> bool {
    errors.is_empty()
}
