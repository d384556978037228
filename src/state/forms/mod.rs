//! Form domain layer
//!
//! Type-safe form handling for the Create Account view.

mod field;
mod form_state;

pub use field::FormField;
pub use form_state::{AccountForm, Form, SIGN_IN_SLOT, SUBMIT_SLOT};
