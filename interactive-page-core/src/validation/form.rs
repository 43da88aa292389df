//! Registration form state and the validation operations that act on it

use crate::markup::FormMarkup;

use super::rules::RuleTable;

/// Name of the confirmation input
pub const CONFIRM_PASSWORD: &str = "confirmPassword";
/// Name of the input the confirmation is compared against
pub const PASSWORD: &str = "password";

pub const PASSWORD_MISMATCH_MESSAGE: &str = "Passwords do not match";
pub const TERMS_REQUIRED_MESSAGE: &str = "You must agree to the Terms and Conditions";

/// A text input with its invalid flag and optional error slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub secret: bool,
    pub value: String,
    /// Visual "invalid" marker on the input
    pub invalid: bool,
    /// Text of the `{name}-error` element; `None` when that element is absent
    pub error: Option<String>,
}

/// The terms checkbox and its error slot
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermsCheckbox {
    pub checked: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone)]
pub struct RegistrationForm {
    fields: Vec<FormField>,
    terms: Option<TermsCheckbox>,
    rules: RuleTable,
}

impl RegistrationForm {
    pub fn new(markup: &FormMarkup, rules: RuleTable) -> Self {
        let fields = markup
            .fields
            .iter()
            .map(|f| FormField {
                name: f.name.clone(),
                label: f.label.clone(),
                secret: f.secret,
                value: String::new(),
                invalid: false,
                error: f.error_slot.then(String::new),
            })
            .collect();

        let terms = markup.terms.then(|| TermsCheckbox {
            checked: false,
            error: markup.terms_error_slot.then(String::new),
        });

        Self {
            fields,
            terms,
            rules,
        }
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.name == name)
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut FormField> {
        self.fields.iter_mut().find(|f| f.name == name)
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.field(name).map(|f| f.value.as_str())
    }

    /// Current error text; `None` if the field or its error slot is absent.
    pub fn error_text(&self, name: &str) -> Option<&str> {
        self.field(name).and_then(|f| f.error.as_deref())
    }

    pub fn is_invalid(&self, name: &str) -> bool {
        self.field(name).is_some_and(|f| f.invalid)
    }

    pub fn terms(&self) -> Option<&TermsCheckbox> {
        self.terms.as_ref()
    }

    pub fn terms_mut(&mut self) -> Option<&mut TermsCheckbox> {
        self.terms.as_mut()
    }

    /// Set the checkbox state. No-op if the checkbox is absent.
    pub fn set_terms(&mut self, checked: bool) {
        if let Some(terms) = self.terms.as_mut() {
            terms.checked = checked;
        }
    }

    pub fn toggle_terms(&mut self) {
        if let Some(terms) = self.terms.as_mut() {
            terms.checked = !terms.checked;
        }
    }

    /// A text change on `name`: store the value, then run whatever check is
    /// bound to that input.
    ///
    /// Rule-table fields re-validate themselves; the confirmation input
    /// re-checks the password match. Other inputs only store the value.
    pub fn input(&mut self, name: &str, value: impl Into<String>) {
        let Some(field) = self.field_mut(name) else {
            return;
        };
        field.value = value.into();

        if self.rules.rule(name).is_some() {
            self.validate_field(name);
        } else if name == CONFIRM_PASSWORD {
            self.validate_password_match();
        }
    }

    /// Validate one rule-table field and surface the result.
    ///
    /// Returns `None` without side effects when the input, its error slot or
    /// its rule is missing.
    pub fn validate_field(&mut self, name: &str) -> Option<bool> {
        let rule = self.rules.rule(name)?;
        let field = self.fields.iter_mut().find(|f| f.name == name)?;
        let error = field.error.as_mut()?;

        let verdict = rule.evaluate(name, &field.value);
        field.invalid = !verdict.valid;
        *error = verdict.message;

        log::debug!("field '{name}' valid={}", verdict.valid);
        Some(verdict.valid)
    }

    /// Compare password and confirmation for exact equality.
    ///
    /// If either input is absent nothing is touched and the pair counts as
    /// not matching. A missing error slot only skips writing the message.
    pub fn validate_password_match(&mut self) -> bool {
        let Some(password) = self.value(PASSWORD).map(str::to_owned) else {
            return false;
        };
        let Some(confirm) = self.field_mut(CONFIRM_PASSWORD) else {
            return false;
        };

        let is_match = password == confirm.value;
        confirm.invalid = !is_match;
        if let Some(error) = confirm.error.as_mut() {
            *error = if is_match {
                String::new()
            } else {
                PASSWORD_MISMATCH_MESSAGE.to_string()
            };
        }

        log::debug!("password confirmation match={is_match}");
        is_match
    }

    /// Restore every control to its default value.
    ///
    /// Error texts and invalid flags are left as they are.
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
        }
        self.set_terms(false);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::markup::FieldMarkup;
    use crate::validation::rules::{required_message, EMAIL_MESSAGE};

    fn form() -> RegistrationForm {
        RegistrationForm::new(&FormMarkup::default(), RuleTable::standard().unwrap())
    }

    fn form_with(fields: Vec<FieldMarkup>) -> RegistrationForm {
        let markup = FormMarkup {
            fields,
            ..FormMarkup::default()
        };
        RegistrationForm::new(&markup, RuleTable::standard().unwrap())
    }

    fn field(name: &str, error_slot: bool) -> FieldMarkup {
        FieldMarkup {
            name: name.to_string(),
            label: name.to_string(),
            secret: false,
            error_slot,
        }
    }

    #[test]
    fn test_valid_value_clears_error_and_flag() {
        let mut f = form();
        f.input("email", "nope");
        assert!(f.is_invalid("email"));
        assert_eq!(f.error_text("email"), Some(EMAIL_MESSAGE));

        f.input("email", "a@b.io");
        assert!(!f.is_invalid("email"));
        assert_eq!(f.error_text("email"), Some(""));
    }

    #[test]
    fn test_validate_empty_required_field() {
        let mut f = form();
        assert_eq!(f.validate_field("username"), Some(false));
        assert_eq!(f.error_text("username"), Some(required_message("username").as_str()));
        assert!(f.is_invalid("username"));
    }

    #[test]
    fn test_empty_phone_is_always_valid() {
        let mut f = form();
        f.input("phone", "123");
        assert!(f.is_invalid("phone"));

        f.input("phone", "   ");
        assert_eq!(f.validate_field("phone"), Some(true));
        assert!(!f.is_invalid("phone"));
        assert_eq!(f.error_text("phone"), Some(""));
    }

    #[test]
    fn test_validate_field_without_rule_is_noop() {
        let mut f = form();
        assert_eq!(f.validate_field("confirmPassword"), None);
        assert_eq!(f.validate_field("nickname"), None);
        assert_eq!(f.error_text("confirmPassword"), Some(""));
    }

    #[test]
    fn test_validate_field_without_input_or_error_slot_is_noop() {
        let mut f = form_with(vec![field("username", false), field("password", true)]);
        assert_eq!(f.validate_field("email"), None);
        assert_eq!(f.validate_field("username"), None);
        assert!(!f.is_invalid("username"));
        assert_eq!(f.error_text("username"), None);
    }

    #[test]
    fn test_password_match() {
        let mut f = form();
        f.input("password", "Abc123@5");

        f.input("confirmPassword", "Abc123@5");
        assert!(f.validate_password_match());
        assert!(!f.is_invalid("confirmPassword"));
        assert_eq!(f.error_text("confirmPassword"), Some(""));

        f.input("confirmPassword", "Abc123@6");
        assert!(!f.validate_password_match());
        assert!(f.is_invalid("confirmPassword"));
        assert_eq!(f.error_text("confirmPassword"), Some(PASSWORD_MISMATCH_MESSAGE));
    }

    #[test]
    fn test_typing_password_does_not_recheck_confirmation() {
        let mut f = form();
        f.input("password", "Abc123@5");
        f.input("confirmPassword", "Abc123@5");
        f.input("password", "Abc123@6");
        assert!(!f.is_invalid("confirmPassword"));
    }

    #[test]
    fn test_password_match_without_confirm_input() {
        let mut f = form_with(vec![field("password", true)]);
        assert!(!f.validate_password_match());
    }

    #[test]
    fn test_input_on_missing_field_is_ignored() {
        let mut f = form_with(vec![field("username", true)]);
        f.input("email", "a@b.c");
        assert_eq!(f.value("email"), None);
    }

    #[test]
    fn test_reset_clears_values_but_keeps_messages() {
        let mut f = form();
        f.input("username", "x");
        f.input("phone", "1234567890");
        f.set_terms(true);

        f.reset();

        assert!(f.fields().iter().all(|field| field.value.is_empty()));
        assert!(!f.terms().unwrap().checked);
        assert!(f.is_invalid("username"));
        assert!(!f.error_text("username").unwrap().is_empty());
    }

    #[test]
    fn test_toggle_terms_without_checkbox() {
        let markup = FormMarkup {
            terms: false,
            ..FormMarkup::default()
        };
        let mut f = RegistrationForm::new(&markup, RuleTable::standard().unwrap());
        f.toggle_terms();
        assert!(f.terms().is_none());
    }
}
