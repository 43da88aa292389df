//! Form submission
//!
//! Submission never leaves the page: the form is validated, and on success a
//! notice is shown and the form is reset.

use std::time::Instant;

use crate::notice::{NoticeBoard, NoticeId, NoticeKind};
use crate::validation::{RegistrationForm, TERMS_REQUIRED_MESSAGE};

pub const SUCCESS_MESSAGE: &str = "Registration successful! Thank you for signing up.";

/// Fields validated on submit, in order
pub const SUBMIT_FIELDS: [&str; 3] = ["username", "email", "password"];

/// Result of one submit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// The terms checkbox is unchecked (or absent); nothing else happened
    TermsNotAccepted,
    /// At least one field failed; per-field errors are already written
    Invalid,
    /// Notice posted and form reset
    Succeeded(NoticeId),
}

impl SubmissionOutcome {
    pub fn is_success(self) -> bool {
        matches!(self, Self::Succeeded(_))
    }
}

/// Handle a submit attempt.
///
/// Every field in `SUBMIT_FIELDS` and the password match are evaluated, even
/// after one has failed, so all errors show at once. A field whose check is a
/// no-op counts as invalid. The terms check runs afterwards and, when it
/// fails, ends the attempt regardless of field validity.
pub fn submit(form: &mut RegistrationForm, notices: &mut NoticeBoard, now: Instant) -> SubmissionOutcome {
    let mut is_valid = true;
    for name in SUBMIT_FIELDS {
        is_valid &= form.validate_field(name).unwrap_or(false);
    }
    is_valid &= form.validate_password_match();

    let Some(terms) = form.terms_mut() else {
        log::debug!("submit aborted: no terms checkbox");
        return SubmissionOutcome::TermsNotAccepted;
    };

    if !terms.checked {
        if let Some(error) = terms.error.as_mut() {
            *error = TERMS_REQUIRED_MESSAGE.to_string();
        }
        log::debug!("submit rejected: terms not accepted");
        return SubmissionOutcome::TermsNotAccepted;
    }
    if let Some(error) = terms.error.as_mut() {
        error.clear();
    }

    if !is_valid {
        log::debug!("submit rejected: invalid fields");
        return SubmissionOutcome::Invalid;
    }

    form.reset();
    let id = notices.post(NoticeKind::Success, SUCCESS_MESSAGE, now);
    log::info!("registration form submitted");
    SubmissionOutcome::Succeeded(id)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::markup::FormMarkup;
    use crate::notice::NOTICE_LIFETIME;
    use crate::validation::{required_message, RuleTable, PASSWORD_MISMATCH_MESSAGE};

    fn form() -> RegistrationForm {
        RegistrationForm::new(&FormMarkup::default(), RuleTable::standard().unwrap())
    }

    fn fill_valid(form: &mut RegistrationForm) {
        form.input("username", "new_user");
        form.input("email", "new@user.dev");
        form.input("password", "Abc123@5");
        form.input("confirmPassword", "Abc123@5");
    }

    #[test]
    fn test_unchecked_terms_blocks_valid_form() {
        let mut f = form();
        let mut board = NoticeBoard::new();
        fill_valid(&mut f);

        let outcome = submit(&mut f, &mut board, Instant::now());

        assert_eq!(outcome, SubmissionOutcome::TermsNotAccepted);
        assert_eq!(
            f.terms().unwrap().error.as_deref(),
            Some(TERMS_REQUIRED_MESSAGE)
        );
        assert!(board.is_empty());
        assert_eq!(f.value("username"), Some("new_user"));
    }

    #[test]
    fn test_all_checks_run_without_short_circuit() {
        let mut f = form();
        let mut board = NoticeBoard::new();
        f.input("password", "Abc123@5");
        f.input("confirmPassword", "different");
        f.set_terms(true);

        let outcome = submit(&mut f, &mut board, Instant::now());

        assert_eq!(outcome, SubmissionOutcome::Invalid);
        assert_eq!(f.error_text("username"), Some(required_message("username").as_str()));
        assert_eq!(f.error_text("email"), Some(required_message("email").as_str()));
        assert_eq!(f.error_text("password"), Some(""));
        assert_eq!(f.error_text("confirmPassword"), Some(PASSWORD_MISMATCH_MESSAGE));
        assert_eq!(f.terms().unwrap().error.as_deref(), Some(""));
        assert!(board.is_empty());
    }

    #[test]
    fn test_invalid_submit_still_writes_terms_error_first() {
        let mut f = form();
        let mut board = NoticeBoard::new();

        let outcome = submit(&mut f, &mut board, Instant::now());

        assert_eq!(outcome, SubmissionOutcome::TermsNotAccepted);
        assert!(f.is_invalid("username"));
        assert_eq!(
            f.terms().unwrap().error.as_deref(),
            Some(TERMS_REQUIRED_MESSAGE)
        );
    }

    #[test]
    fn test_phone_is_not_checked_on_submit() {
        let mut f = form();
        let mut board = NoticeBoard::new();
        fill_valid(&mut f);
        f.input("phone", "12");
        f.set_terms(true);

        let outcome = submit(&mut f, &mut board, Instant::now());

        assert!(outcome.is_success());
        // reset leaves the stale phone message in place
        assert!(f.is_invalid("phone"));
    }

    #[test]
    fn test_success_posts_notice_resets_form_and_expires() {
        let start = Instant::now();
        let mut f = form();
        let mut board = NoticeBoard::new();
        fill_valid(&mut f);
        f.set_terms(true);

        let SubmissionOutcome::Succeeded(id) = submit(&mut f, &mut board, start) else {
            panic!("expected success");
        };

        assert_eq!(board.notices().len(), 1);
        assert_eq!(board.notices()[0].text, SUCCESS_MESSAGE);
        assert!(f.fields().iter().all(|field| field.value.is_empty()));
        assert!(!f.terms().unwrap().checked);

        board.expire(start + Duration::from_millis(2999));
        assert!(board.contains(id));
        board.expire(start + NOTICE_LIFETIME);
        assert!(!board.contains(id));
    }

    #[test]
    fn test_missing_terms_checkbox_aborts() {
        let markup = FormMarkup {
            terms: false,
            ..FormMarkup::default()
        };
        let mut f = RegistrationForm::new(&markup, RuleTable::standard().unwrap());
        let mut board = NoticeBoard::new();
        fill_valid(&mut f);

        assert_eq!(
            submit(&mut f, &mut board, Instant::now()),
            SubmissionOutcome::TermsNotAccepted
        );
        assert!(board.is_empty());
    }
}
