#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
//! Integration tests driving `PageState` through whole interaction sequences.

use std::time::{Duration, Instant};

use interactive_page_core::markup::{FieldMarkup, PageMarkup};
use interactive_page_core::notice::NOTICE_LIFETIME;
use interactive_page_core::submission::SUCCESS_MESSAGE;
use interactive_page_core::validation::{
    required_message, PASSWORD_MISMATCH_MESSAGE, TERMS_REQUIRED_MESSAGE, USERNAME_MESSAGE,
};
use interactive_page_core::{CoreError, PageState, SubmissionOutcome, ThemeState};

fn load_default() -> PageState {
    PageState::load(&PageMarkup::default()).expect("default markup loads")
}

fn type_into(page: &mut PageState, field: &str, text: &str) {
    // one input event per keystroke, the way a user types
    let mut value = String::new();
    for ch in text.chars() {
        value.push(ch);
        page.form.input(field, value.clone());
    }
}

#[test]
fn test_fresh_page_matches_markup() {
    let page = load_default();

    assert_eq!(page.theme.state(), ThemeState::Light);
    assert_eq!(page.tabs.active_control(), Some(0));
    assert_eq!(page.tabs.active_panel(), Some(0));
    assert_eq!(page.accordion.open_section(), None);
    assert!(page.notices.is_empty());
    assert!(page.form.fields().iter().all(|f| f.value.is_empty() && !f.invalid));
}

#[test]
fn test_widgets_do_not_affect_each_other() {
    let mut page = load_default();

    page.theme.toggle();
    page.tabs.click(2);
    page.accordion.click(1);

    assert_eq!(page.theme.state(), ThemeState::Dark);
    assert_eq!(page.tabs.active_control(), Some(2));
    assert_eq!(page.accordion.open_section(), Some(1));

    page.theme.toggle();
    assert_eq!(page.theme.state(), ThemeState::Light);
    assert_eq!(page.tabs.active_control(), Some(2));
    assert_eq!(page.accordion.open_section(), Some(1));
}

#[test]
fn test_live_validation_while_typing() {
    let mut page = load_default();

    type_into(&mut page, "username", "ab");
    assert!(page.form.is_invalid("username"));
    assert_eq!(page.form.error_text("username"), Some(USERNAME_MESSAGE));

    type_into(&mut page, "username", "abc");
    assert!(!page.form.is_invalid("username"));
    assert_eq!(page.form.error_text("username"), Some(""));

    page.form.input("username", "");
    assert_eq!(
        page.form.error_text("username"),
        Some(required_message("username").as_str())
    );
}

#[test]
fn test_confirmation_is_checked_while_typing() {
    let mut page = load_default();
    type_into(&mut page, "password", "Abc123@5");

    type_into(&mut page, "confirmPassword", "Abc123@");
    assert_eq!(
        page.form.error_text("confirmPassword"),
        Some(PASSWORD_MISMATCH_MESSAGE)
    );

    type_into(&mut page, "confirmPassword", "Abc123@5");
    assert_eq!(page.form.error_text("confirmPassword"), Some(""));
    assert!(!page.form.is_invalid("confirmPassword"));
}

#[test]
fn test_full_registration_flow() {
    let start = Instant::now();
    let mut page = load_default();

    // first attempt: terms unchecked
    assert_eq!(page.submit(start), SubmissionOutcome::TermsNotAccepted);
    assert_eq!(
        page.form.terms().unwrap().error.as_deref(),
        Some(TERMS_REQUIRED_MESSAGE)
    );

    // second attempt: terms checked, fields still empty
    page.form.toggle_terms();
    assert_eq!(page.submit(start), SubmissionOutcome::Invalid);
    assert_eq!(page.form.terms().unwrap().error.as_deref(), Some(""));
    assert!(page.notices.is_empty());

    // third attempt: everything valid
    type_into(&mut page, "username", "jane_doe");
    type_into(&mut page, "email", "jane@example.org");
    type_into(&mut page, "password", "s3cret!pass");
    type_into(&mut page, "confirmPassword", "s3cret!pass");
    type_into(&mut page, "phone", "+15551234567");

    let outcome = page.submit(start);
    assert!(outcome.is_success());
    assert_eq!(page.notices.notices()[0].text, SUCCESS_MESSAGE);
    assert!(page.form.fields().iter().all(|f| f.value.is_empty()));
    assert!(!page.form.terms().unwrap().checked);

    page.tick(start + Duration::from_millis(1500));
    assert_eq!(page.notices.notices().len(), 1);
    page.tick(start + NOTICE_LIFETIME);
    assert!(page.notices.is_empty());
}

#[test]
fn test_rapid_resubmits_schedule_independent_removals() {
    let start = Instant::now();
    let mut page = load_default();

    for offset in [0_u64, 500] {
        type_into(&mut page, "username", "jane_doe");
        type_into(&mut page, "email", "jane@example.org");
        type_into(&mut page, "password", "Abc123@5");
        type_into(&mut page, "confirmPassword", "Abc123@5");
        page.form.set_terms(true);
        assert!(page.submit(start + Duration::from_millis(offset)).is_success());
    }
    assert_eq!(page.notices.notices().len(), 2);

    page.tick(start + NOTICE_LIFETIME);
    assert_eq!(page.notices.notices().len(), 1);
    page.tick(start + NOTICE_LIFETIME + Duration::from_millis(500));
    assert!(page.notices.is_empty());
}

#[test]
fn test_markup_without_optional_elements_degrades_silently() {
    let mut markup = PageMarkup::default();
    markup.form.fields.retain(|f| f.name != "phone" && f.name != "confirmPassword");
    markup.form.fields.push(FieldMarkup {
        name: "nickname".to_string(),
        label: "Nickname".to_string(),
        secret: false,
        error_slot: true,
    });
    markup.tabs.controls[1].target = "gone".to_string();

    let mut page = PageState::load(&markup).unwrap();

    page.form.input("phone", "123");
    assert_eq!(page.form.validate_field("phone"), None);
    assert_eq!(page.form.validate_field("nickname"), None);
    page.form.input("nickname", "anything");
    assert_eq!(page.form.error_text("nickname"), Some(""));

    page.tabs.click(1);
    assert_eq!(page.tabs.active_control(), Some(1));
    assert_eq!(page.tabs.active_panel(), None);

    // without a confirmation input the form can never be submitted successfully
    type_into(&mut page, "username", "jane_doe");
    type_into(&mut page, "email", "jane@example.org");
    type_into(&mut page, "password", "Abc123@5");
    page.form.set_terms(true);
    assert_eq!(page.submit(Instant::now()), SubmissionOutcome::Invalid);
}

#[test]
fn test_load_rejects_duplicate_ids() {
    let mut markup = PageMarkup::default();
    markup.tabs.controls[2].id = markup.tabs.controls[0].id.clone();

    match PageState::load(&markup) {
        Err(CoreError::Markup(msg)) => assert!(msg.contains("duplicate tab control id")),
        other => panic!("expected markup error, got {other:?}"),
    }
}

#[test]
fn test_load_rejects_two_open_accordion_sections() {
    let mut markup = PageMarkup::default();
    markup.accordion[1].open = true;
    let page = PageState::load(&markup).unwrap();
    assert_eq!(page.accordion.open_section(), Some(1));

    markup.accordion[0].open = true;
    markup.accordion[2].open = true;
    match PageState::load(&markup) {
        Err(CoreError::Markup(msg)) => assert_eq!(msg, "more than one open accordion section"),
        other => panic!("expected markup error, got {other:?}"),
    }
}
