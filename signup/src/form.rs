//! Registration form state and submit flow.

use std::str::FromStr;

use formkit::field::TextField;
use formkit::state::State;
use formkit::validation::{ValidationResult, Validator};
use log::debug;

use crate::config::SignupConfig;
use crate::events::{FieldName, FormError, FormEvent};
use crate::values::FormValues;

/// The registration form: three text fields plus the outcome of the most
/// recent submission attempt.
///
/// Fields are edited freely without validation. Validation runs only on
/// [`submit`](SignupForm::submit), in a fixed priority order (email syntax,
/// then password length, then confirmation match), and produces at most one
/// error message. Editing a field after a failed submission leaves the
/// displayed error in place until the next submit.
///
/// Cheap to clone; clones share state.
///
/// # Example
///
/// ```
/// use signup::{FieldName, SignupForm};
///
/// let form = SignupForm::new();
/// form.set_field(FieldName::Email, "someone@example.com");
/// form.set_field(FieldName::Password, "secret");
/// form.set_field(FieldName::PasswordConfirmation, "secret");
///
/// assert!(form.submit().is_valid());
/// assert_eq!(form.error_message(), None);
/// ```
#[derive(Debug, Clone)]
pub struct SignupForm {
    email: TextField,
    password: TextField,
    password_confirmation: TextField,
    outcome: State<ValidationResult>,
    config: SignupConfig,
}

impl SignupForm {
    /// Create a form with default configuration. All fields start empty and
    /// no error is displayed.
    pub fn new() -> Self {
        Self::with_config(SignupConfig::default())
    }

    /// Create a form with the given configuration.
    pub fn with_config(config: SignupConfig) -> Self {
        Self {
            email: TextField::new(),
            password: TextField::new(),
            password_confirmation: TextField::new(),
            outcome: State::default(),
            config,
        }
    }

    /// Get the field with the given name.
    pub fn field(&self, name: FieldName) -> &TextField {
        match name {
            FieldName::Email => &self.email,
            FieldName::Password => &self.password,
            FieldName::PasswordConfirmation => &self.password_confirmation,
        }
    }

    /// Replace a field's value. No validation runs here, and the displayed
    /// error does not change.
    pub fn set_field(&self, name: FieldName, value: impl Into<String>) {
        self.field(name).set_value(value);
    }

    /// Snapshot the current field values.
    pub fn values(&self) -> FormValues {
        FormValues {
            email: self.email.value(),
            password: self.password.value(),
            password_confirmation: self.password_confirmation.value(),
        }
    }

    /// Route an event from the rendering layer.
    pub fn handle(&self, event: FormEvent) -> Result<(), FormError> {
        match event {
            FormEvent::Edit { field, value } => {
                let name = FieldName::from_str(&field)?;
                self.set_field(name, value);
                Ok(())
            }
            FormEvent::Submit => {
                self.submit();
                Ok(())
            }
        }
    }

    /// Validate the latest values and store the result as the new submission
    /// outcome.
    ///
    /// Checks run in priority order and the first failure wins. Field error
    /// slots are rewritten to reflect this submission only: the failing field
    /// carries the message, every other field is clear.
    pub fn submit(&self) -> ValidationResult {
        for name in FieldName::ALL {
            self.field(name).clear_error();
        }

        let min = self.config.min_password_length;
        let result = Validator::new()
            .field(&self.email, "email")
            .email("Email input is invalid")
            .field(&self.password, "password")
            .min_length(
                min,
                format!("The password you entered should contain {min} or more characters"),
            )
            .field(&self.password_confirmation, "passwordConfirmation")
            .equals(self.password.value(), "Password don't match")
            .validate();

        match result.message() {
            Some(message) => debug!("registration rejected: {message}"),
            None => debug!("registration accepted"),
        }

        self.outcome.set(result.clone());
        result
    }

    /// Outcome of the most recent submission. `Valid` before any submission.
    pub fn outcome(&self) -> ValidationResult {
        self.outcome.get()
    }

    /// The single error message slot: the message from the most recent
    /// submission, or `None` before the first submission and after a fully
    /// valid one.
    pub fn error_message(&self) -> Option<String> {
        self.outcome.get().message().map(str::to_owned)
    }

    /// Subscribe a listener invoked whenever the submission outcome changes.
    pub fn watch<F>(&self, listener: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.outcome.watch(listener);
    }
}

impl Default for SignupForm {
    fn default() -> Self {
        Self::new()
    }
}
