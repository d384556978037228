//! Form rendering module
//!
//! - `field_renderer`: Field rendering utilities
//! - `account_form`: the Create Account form

mod account_form;
mod field_renderer;

pub use account_form::draw_create_account;
