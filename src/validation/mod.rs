//! Account form domain: values, validation rules and password strength
//!
//! Everything here is plain data in, plain data out, so it can be tested
//! without a terminal.

mod form_data;
mod rules;
mod strength;

pub use form_data::{FieldInput, FieldName, FormData};
pub use rules::{is_valid, validate, ErrorMap};
pub use strength::{score, PasswordStrength};
