//! Validatable trait for fields that support validation.

/// Trait for fields that can be validated.
///
/// This trait provides a common interface for extracting values from fields
/// and setting/clearing validation errors.
pub trait Validatable: Send + Sync {
    /// The value type used for validation.
    type Value;

    /// Extract the current value for validation.
    fn validation_value(&self) -> Self::Value;

    /// Set a validation error on this field.
    fn set_error(&self, msg: impl Into<String>);

    /// Clear the validation error.
    fn clear_error(&self);

    /// Check if the field has a validation error.
    fn has_error(&self) -> bool;

    /// Get the current validation error message (if any).
    fn error(&self) -> Option<String>;

    /// Get the field ID for focusing.
    fn field_id(&self) -> String;
}
