//! Submission scenarios for the registration form.
//!
//! Validation order: email syntax, then password length, then confirmation
//! match. One error message at a time, first failure wins, and the displayed
//! error changes only on submit.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use signup::{FieldName, SignupConfig, SignupForm};

const EMAIL_ERROR: &str = "Email input is invalid";
const PASSWORD_ERROR: &str = "The password you entered should contain 5 or more characters";
const MISMATCH_ERROR: &str = "Password don't match";

fn fill(form: &SignupForm, email: &str, password: &str, confirmation: &str) {
    form.set_field(FieldName::Email, email);
    form.set_field(FieldName::Password, password);
    form.set_field(FieldName::PasswordConfirmation, confirmation);
}

#[test]
fn test_fields_initially_empty() {
    let form = SignupForm::new();
    for name in FieldName::ALL {
        assert!(form.field(name).is_empty());
    }
    assert_eq!(form.values(), Default::default());
}

#[test]
fn test_no_error_before_first_submission() {
    let form = SignupForm::new();
    assert_eq!(form.error_message(), None);
    assert!(form.outcome().is_valid());
}

#[test]
fn test_invalid_email_rejected() {
    let form = SignupForm::new();
    fill(&form, "not-an-email", "12345", "12345");

    let result = form.submit();
    assert_eq!(result.message(), Some(EMAIL_ERROR));
    assert_eq!(form.error_message().as_deref(), Some(EMAIL_ERROR));
}

#[test]
fn test_valid_email_with_empty_password() {
    let form = SignupForm::new();
    fill(&form, "a.b@gmail.com", "", "");

    let result = form.submit();
    assert_eq!(result.message(), Some(PASSWORD_ERROR));
}

#[test]
fn test_password_shorter_than_five_rejected() {
    let form = SignupForm::new();
    fill(&form, "a@b.com", "1234", "1234");

    let result = form.submit();
    assert_eq!(result.message(), Some(PASSWORD_ERROR));
}

#[test]
fn test_password_mismatch_rejected() {
    let form = SignupForm::new();
    fill(&form, "a@b.com", "12345", "54321");

    let result = form.submit();
    assert_eq!(result.message(), Some(MISMATCH_ERROR));
}

#[test]
fn test_valid_submission_accepted() {
    let form = SignupForm::new();
    fill(&form, "a@b.com", "12345", "12345");

    let result = form.submit();
    assert!(result.is_valid());
    assert_eq!(form.error_message(), None);
}

#[test]
fn test_email_failure_takes_priority() {
    // All three checks would fail; only the first is reported.
    let form = SignupForm::new();
    fill(&form, "nope", "1", "2");

    let result = form.submit();
    assert_eq!(result.message(), Some(EMAIL_ERROR));
}

#[test]
fn test_password_failure_beats_mismatch() {
    let form = SignupForm::new();
    fill(&form, "a@b.com", "123", "different");

    let result = form.submit();
    assert_eq!(result.message(), Some(PASSWORD_ERROR));
}

#[test]
fn test_editing_does_not_clear_error_until_resubmit() {
    let form = SignupForm::new();
    fill(&form, "a@b.com", "12345", "54321");
    form.submit();
    assert_eq!(form.error_message().as_deref(), Some(MISMATCH_ERROR));

    // Fix the confirmation; the error stays until the next submit.
    form.set_field(FieldName::PasswordConfirmation, "12345");
    assert_eq!(form.error_message().as_deref(), Some(MISMATCH_ERROR));

    let result = form.submit();
    assert!(result.is_valid());
    assert_eq!(form.error_message(), None);
}

#[test]
fn test_error_transitions_between_checks() {
    let form = SignupForm::new();
    fill(&form, "nope", "12345", "12345");
    form.submit();
    assert_eq!(form.error_message().as_deref(), Some(EMAIL_ERROR));

    form.set_field(FieldName::Email, "a@b.com");
    form.set_field(FieldName::Password, "123");
    form.set_field(FieldName::PasswordConfirmation, "123");
    form.submit();
    assert_eq!(form.error_message().as_deref(), Some(PASSWORD_ERROR));

    form.set_field(FieldName::Password, "123456");
    form.submit();
    assert_eq!(form.error_message().as_deref(), Some(MISMATCH_ERROR));

    form.set_field(FieldName::PasswordConfirmation, "123456");
    form.submit();
    assert_eq!(form.error_message(), None);
}

#[test]
fn test_submit_is_idempotent_for_fixed_values() {
    let form = SignupForm::new();
    fill(&form, "a@b.com", "1234", "1234");

    let first = form.submit();
    let second = form.submit();
    assert_eq!(first, second);
}

#[test]
fn test_failing_field_carries_the_error_slot() {
    let form = SignupForm::new();
    fill(&form, "a@b.com", "12345", "54321");
    form.submit();

    assert!(!form.field(FieldName::Email).has_error());
    assert!(!form.field(FieldName::Password).has_error());
    assert_eq!(
        form.field(FieldName::PasswordConfirmation).error().as_deref(),
        Some(MISMATCH_ERROR)
    );
}

#[test]
fn test_field_slots_reflect_latest_submission_only() {
    let form = SignupForm::new();
    fill(&form, "a@b.com", "12345", "54321");
    form.submit();
    assert!(form.field(FieldName::PasswordConfirmation).has_error());

    fill(&form, "nope", "12345", "54321");
    form.submit();

    assert!(form.field(FieldName::Email).has_error());
    assert!(!form.field(FieldName::PasswordConfirmation).has_error());
}

#[test]
fn test_password_length_counts_code_points() {
    let form = SignupForm::new();
    fill(&form, "a@b.com", "héllo", "héllo");

    assert!(form.submit().is_valid());
}

#[test]
fn test_configured_minimum_length() {
    let form = SignupForm::with_config(SignupConfig::new().min_password_length(8));
    fill(&form, "a@b.com", "1234567", "1234567");

    let result = form.submit();
    assert_eq!(
        result.message(),
        Some("The password you entered should contain 8 or more characters")
    );

    form.set_field(FieldName::Password, "12345678");
    form.set_field(FieldName::PasswordConfirmation, "12345678");
    assert!(form.submit().is_valid());
}

#[test]
fn test_watch_fires_on_every_submit() {
    let form = SignupForm::new();
    let fired = Arc::new(AtomicUsize::new(0));

    let counter = Arc::clone(&fired);
    form.watch(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    fill(&form, "a@b.com", "12345", "12345");
    form.submit();
    form.submit();

    // Edits alone never touch the outcome.
    form.set_field(FieldName::Email, "c@d.com");
    assert_eq!(fired.load(Ordering::SeqCst), 2);
}

#[test]
fn test_clone_shares_form_state() {
    let form = SignupForm::new();
    let alias = form.clone();

    fill(&alias, "a@b.com", "12345", "54321");
    form.submit();

    assert_eq!(alias.error_message().as_deref(), Some(MISMATCH_ERROR));
}
