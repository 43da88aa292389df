//! Field validation engine
//!
//! - `rules`: the static rule table and single-value checks
//! - `form`: per-field state, error slots and the form-level operations

mod form;
mod rules;

pub use form::{
    FormField, RegistrationForm, TermsCheckbox, CONFIRM_PASSWORD, PASSWORD,
    PASSWORD_MISMATCH_MESSAGE, TERMS_REQUIRED_MESSAGE,
};
pub use rules::{
    required_message, FieldRule, RuleTable, Verdict, EMAIL_MESSAGE, PASSWORD_MESSAGE,
    PHONE_MESSAGE, USERNAME_MESSAGE,
};
