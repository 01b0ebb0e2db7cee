//! Events crossing the presentation boundary.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Identifier for one of the three registration fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    Email,
    Password,
    PasswordConfirmation,
}

impl FieldName {
    /// All fields, in validation priority order.
    pub const ALL: [Self; 3] = [Self::Email, Self::Password, Self::PasswordConfirmation];

    /// Wire name used by the presentation layer.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Password => "password",
            Self::PasswordConfirmation => "passwordConfirmation",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldName {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "email" => Ok(Self::Email),
            "password" => Ok(Self::Password),
            "passwordConfirmation" => Ok(Self::PasswordConfirmation),
            other => Err(FormError::unknown_field(other)),
        }
    }
}

/// Input from the rendering layer.
#[derive(Debug, Clone)]
pub enum FormEvent {
    /// A field's text changed. `field` is the wire name of the input.
    Edit {
        /// Wire name of the edited field.
        field: String,
        /// New text value.
        value: String,
    },
    /// The form was submitted.
    Submit,
}

/// Error type for form operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// The event addressed a field this form does not have.
    #[error("Field '{name}' not found in form")]
    UnknownField { name: String },
}

impl FormError {
    /// Creates a new unknown field error.
    pub fn unknown_field(name: impl Into<String>) -> Self {
        Self::UnknownField { name: name.into() }
    }
}
