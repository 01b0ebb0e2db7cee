/// Information about a single field validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Field name (from `.field()` call).
    pub field_name: String,
    /// Field ID (for focusing the offending field).
    pub field_id: String,
    /// Error message.
    pub message: String,
}

/// Result of validating one or more fields.
///
/// Carries at most one error: checks run in declaration order and the first
/// failure wins, so later checks are never evaluated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ValidationResult {
    /// All fields passed validation.
    #[default]
    Valid,
    /// A field failed validation.
    Invalid(FieldError),
}

impl ValidationResult {
    /// Check if all fields passed validation.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Check if a field failed validation.
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Get the validation error (if any).
    pub fn error(&self) -> Option<&FieldError> {
        match self {
            Self::Valid => None,
            Self::Invalid(error) => Some(error),
        }
    }

    /// Get the error message (if any).
    pub fn message(&self) -> Option<&str> {
        self.error().map(|e| e.message.as_str())
    }

    /// Get the field ID of the invalid field (for focusing).
    pub fn invalid_field(&self) -> Option<&str> {
        self.error().map(|e| e.field_id.as_str())
    }
}
