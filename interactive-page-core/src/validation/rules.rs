//! Rule table: field name → pattern + message

use regex::Regex;

use crate::error::{CoreError, CoreResult};

/// Outcome of checking one value against one rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub valid: bool,
    /// Empty when valid
    pub message: String,
}

impl Verdict {
    fn valid() -> Self {
        Self {
            valid: true,
            message: String::new(),
        }
    }

    fn invalid(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: message.into(),
        }
    }
}

/// Validation rule for a single field
#[derive(Debug, Clone)]
pub struct FieldRule {
    /// Whole-value pattern
    pattern: Regex,
    /// Additional patterns that must each match somewhere in the value
    requires: Vec<Regex>,
    message: &'static str,
    /// Empty values are accepted without a message
    optional: bool,
}

impl FieldRule {
    fn build(
        field: &'static str,
        pattern: &str,
        requires: &[&str],
        message: &'static str,
        optional: bool,
    ) -> CoreResult<Self> {
        let compile =
            |p: &str| Regex::new(p).map_err(|source| CoreError::InvalidPattern { field, source });

        Ok(Self {
            pattern: compile(pattern)?,
            requires: requires.iter().map(|p| compile(p)).collect::<CoreResult<_>>()?,
            message,
            optional,
        })
    }

    pub fn is_optional(&self) -> bool {
        self.optional
    }

    /// Whether `value` satisfies the pattern (emptiness is not considered).
    pub fn matches(&self, value: &str) -> bool {
        self.pattern.is_match(value) && self.requires.iter().all(|re| re.is_match(value))
    }

    /// Check `value` for the field called `field_name`.
    ///
    /// Order: blank → required message (or valid if optional), then pattern.
    /// The pattern is tested against the untrimmed value.
    pub fn evaluate(&self, field_name: &str, value: &str) -> Verdict {
        if is_blank(value) {
            if self.optional {
                return Verdict::valid();
            }
            return Verdict::invalid(required_message(field_name));
        }

        if self.matches(value) {
            Verdict::valid()
        } else {
            Verdict::invalid(self.message)
        }
    }
}

/// Empty once whitespace and byte-order marks are stripped.
fn is_blank(value: &str) -> bool {
    value.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}').is_empty()
}

/// "{Field} is required", with the field name's first letter upper-cased.
pub fn required_message(field_name: &str) -> String {
    let mut chars = field_name.chars();
    let capitalized: String = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    };
    format!("{capitalized} is required")
}

pub const USERNAME_MESSAGE: &str =
    "Username must be 3-20 characters and contain only letters, numbers, and underscores";
pub const EMAIL_MESSAGE: &str = "Please enter a valid email address";
pub const PASSWORD_MESSAGE: &str =
    "Password must be at least 8 characters and include letters, numbers, and special characters";
pub const PHONE_MESSAGE: &str = "Please enter a valid phone number (10-15 digits)";

/// Static mapping from field name to rule
#[derive(Debug, Clone)]
pub struct RuleTable {
    rules: Vec<(&'static str, FieldRule)>,
}

impl RuleTable {
    /// The registration form's rules: username, email, password, phone.
    pub fn standard() -> CoreResult<Self> {
        let rules = vec![
            (
                "username",
                FieldRule::build("username", r"^[a-zA-Z0-9_]{3,20}$", &[], USERNAME_MESSAGE, false)?,
            ),
            (
                "email",
                FieldRule::build("email", r"^[^\s@]+@[^\s@]+\.[^\s@]+$", &[], EMAIL_MESSAGE, false)?,
            ),
            (
                "password",
                FieldRule::build(
                    "password",
                    r"^[A-Za-z0-9@$!%*#?&]{8,}$",
                    &[r"[A-Za-z]", r"[0-9]", r"[@$!%*#?&]"],
                    PASSWORD_MESSAGE,
                    false,
                )?,
            ),
            (
                "phone",
                FieldRule::build("phone", r"^\+?[0-9]{10,15}$", &[], PHONE_MESSAGE, true)?,
            ),
        ];

        Ok(Self { rules })
    }

    pub fn rule(&self, field_name: &str) -> Option<&FieldRule> {
        self.rules
            .iter()
            .find(|(name, _)| *name == field_name)
            .map(|(_, rule)| rule)
    }

    /// Field names in table order
    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(|(name, _)| *name)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn table() -> RuleTable {
        RuleTable::standard().unwrap()
    }

    fn check(field: &str, value: &str) -> Verdict {
        table().rule(field).unwrap().evaluate(field, value)
    }

    #[test]
    fn test_table_has_four_fields() {
        let names: Vec<_> = table().field_names().collect();
        assert_eq!(names, ["username", "email", "password", "phone"]);
        assert!(table().rule("confirmPassword").is_none());
    }

    #[test]
    fn test_only_phone_is_optional() {
        let t = table();
        for name in ["username", "email", "password"] {
            assert!(!t.rule(name).unwrap().is_optional(), "{name}");
        }
        assert!(t.rule("phone").unwrap().is_optional());
    }

    #[test]
    fn test_required_message_capitalizes() {
        assert_eq!(required_message("username"), "Username is required");
        assert_eq!(required_message("email"), "Email is required");
        assert_eq!(required_message(""), " is required");
    }

    #[test]
    fn test_blank_values_are_required_except_phone() {
        for field in ["username", "email", "password"] {
            for value in ["", "   ", "\t"] {
                let v = check(field, value);
                assert!(!v.valid);
                assert_eq!(v.message, required_message(field));
            }
        }
        for value in ["", "  "] {
            assert_eq!(check("phone", value), Verdict::valid());
        }
    }

    #[test]
    fn test_byte_order_mark_counts_as_blank() {
        let v = check("username", "\u{FEFF}");
        assert!(!v.valid);
        assert_eq!(v.message, "Username is required");

        assert_eq!(check("email", " \u{FEFF}\t").message, "Email is required");
        assert_eq!(check("phone", "\u{FEFF}"), Verdict::valid());
    }

    #[test]
    fn test_username_rule() {
        for ok in ["abc", "user_01", "A1234567890123456789"] {
            assert!(check("username", ok).valid, "{ok}");
        }
        for bad in ["ab", "has space", "dash-name", "A12345678901234567890", "ünï"] {
            let v = check("username", bad);
            assert!(!v.valid, "{bad}");
            assert_eq!(v.message, USERNAME_MESSAGE);
        }
    }

    #[test]
    fn test_email_rule() {
        for ok in ["a@b.c", "first.last@example.co.uk"] {
            assert!(check("email", ok).valid, "{ok}");
        }
        for bad in ["plain", "a@b", "a @b.c", "a@@b.c", "@b.c", "a@b."] {
            let v = check("email", bad);
            assert!(!v.valid, "{bad}");
            assert_eq!(v.message, EMAIL_MESSAGE);
        }
    }

    #[test]
    fn test_password_rule() {
        assert!(check("password", "abc123@5").valid);
        assert!(check("password", "Abc123@5").valid);

        // no special character
        assert!(!check("password", "abc12345").valid);
        // 7 characters
        assert!(!check("password", "short1@").valid);
        // no digit
        assert!(!check("password", "abcdefg@").valid);
        // no letter
        assert!(!check("password", "1234567@").valid);
        // character outside the permitted set
        assert!(!check("password", "abc123@5^").valid);
        assert!(!check("password", "abc 123@5").valid);

        assert_eq!(check("password", "abc12345").message, PASSWORD_MESSAGE);
    }

    #[test]
    fn test_phone_rule() {
        for ok in ["1234567890", "+123456789012345"] {
            assert!(check("phone", ok).valid, "{ok}");
        }
        for bad in ["123456789", "+1234567890123456", "12345-67890", "++1234567890"] {
            let v = check("phone", bad);
            assert!(!v.valid, "{bad}");
            assert_eq!(v.message, PHONE_MESSAGE);
        }
    }

    #[test]
    fn test_pattern_sees_untrimmed_value() {
        // non-blank but padded values are rejected by the pattern, not by the required check
        let v = check("username", " alice ");
        assert!(!v.valid);
        assert_eq!(v.message, USERNAME_MESSAGE);
    }
}
