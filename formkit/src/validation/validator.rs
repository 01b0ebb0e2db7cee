//! Validator builder for fluent validation API.

use super::result::{FieldError, ValidationResult};
use super::validatable::Validatable;

/// Type alias for validation rule closures.
type Rule<V> = Box<dyn Fn(&V) -> Result<(), String> + Send + Sync>;

/// Internal representation of a field being validated.
struct FieldEntry {
    name: String,
    field_id: String,
    set_error: Box<dyn Fn(Option<String>) + Send + Sync>,
    /// Runs the field's rules in order; returns the first failure message.
    run: Box<dyn Fn() -> Option<String> + Send + Sync>,
}

/// Builder for validating multiple form fields.
///
/// Fields are checked in declaration order. The first failing rule stops
/// validation: its field gets the error set, fields checked before it get
/// their error cleared, and fields after it are not evaluated at all.
///
/// # Example
///
/// ```ignore
/// let result = Validator::new()
///     .field(&self.email, "email")
///         .email("Invalid email format")
///     .field(&self.password, "password")
///         .min_length(5, "Password too short")
///     .validate();
///
/// if result.is_valid() {
///     // Submit form
/// }
/// ```
pub struct Validator {
    fields: Vec<FieldEntry>,
}

impl Validator {
    /// Create a new validator.
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Add a field to validate.
    pub fn field<W: Validatable + Clone + 'static>(
        self,
        field: &W,
        name: impl Into<String>,
    ) -> FieldBuilder<W>
    where
        W::Value: 'static,
    {
        FieldBuilder {
            validator: self,
            field: field.clone(),
            name: name.into(),
            rules: Vec::new(),
        }
    }

    /// Run all validations, stopping at the first failure.
    pub fn validate(self) -> ValidationResult {
        for field in &self.fields {
            match (field.run)() {
                Some(message) => {
                    (field.set_error)(Some(message.clone()));
                    return ValidationResult::Invalid(FieldError {
                        field_name: field.name.clone(),
                        field_id: field.field_id.clone(),
                        message,
                    });
                }
                None => (field.set_error)(None),
            }
        }
        ValidationResult::Valid
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for adding validation rules to a single field.
pub struct FieldBuilder<W: Validatable> {
    validator: Validator,
    field: W,
    name: String,
    rules: Vec<Rule<W::Value>>,
}

impl<W: Validatable + Clone + 'static> FieldBuilder<W>
where
    W::Value: 'static,
{
    /// Add a custom validation rule.
    pub fn rule<F>(mut self, f: F, msg: impl Into<String>) -> Self
    where
        F: Fn(&W::Value) -> bool + Send + Sync + 'static,
    {
        let msg = msg.into();
        self.rules
            .push(Box::new(move |v| if f(v) { Ok(()) } else { Err(msg.clone()) }));
        self
    }

    /// Continue to the next field.
    pub fn field<W2: Validatable + Clone + 'static>(
        self,
        field: &W2,
        name: impl Into<String>,
    ) -> FieldBuilder<W2>
    where
        W2::Value: 'static,
    {
        let validator = self.finalize();
        validator.field(field, name)
    }

    /// Finalize and run all validations.
    pub fn validate(self) -> ValidationResult {
        self.finalize().validate()
    }

    /// Finalize this field and return the validator.
    fn finalize(self) -> Validator {
        let field_id = self.field.field_id();
        let name = self.name;

        let field_for_run = self.field.clone();
        let field_for_error = self.field;
        let rules = self.rules;

        let run: Box<dyn Fn() -> Option<String> + Send + Sync> = Box::new(move || {
            let value = field_for_run.validation_value();
            rules.iter().find_map(|rule| rule(&value).err())
        });

        let set_error: Box<dyn Fn(Option<String>) + Send + Sync> = Box::new(move |msg| {
            if let Some(msg) = msg {
                field_for_error.set_error(msg);
            } else {
                field_for_error.clear_error();
            }
        });

        let mut validator = self.validator;
        validator.fields.push(FieldEntry {
            name,
            field_id,
            set_error,
            run,
        });

        validator
    }
}

// Built-in rules for String values
impl<W: Validatable<Value = String> + Clone + 'static> FieldBuilder<W> {
    /// Require the field to be non-empty.
    pub fn required(self, msg: impl Into<String>) -> Self {
        let msg = msg.into();
        self.rule(|v| !v.trim().is_empty(), msg)
    }

    /// Require minimum length (in code points).
    pub fn min_length(self, min: usize, msg: impl Into<String>) -> Self {
        let msg = msg.into();
        self.rule(move |v| v.chars().count() >= min, msg)
    }

    /// Require maximum length (in code points).
    pub fn max_length(self, max: usize, msg: impl Into<String>) -> Self {
        let msg = msg.into();
        self.rule(move |v| v.chars().count() <= max, msg)
    }

    /// Require the value to match a regex pattern.
    pub fn pattern(self, pattern: &str, msg: impl Into<String>) -> Self {
        let msg = msg.into();
        let re = regex::Regex::new(pattern).expect("Invalid regex pattern");
        self.rule(move |v| re.is_match(v), msg)
    }

    /// Require a syntactically valid email address.
    pub fn email(self, msg: impl Into<String>) -> Self {
        let msg = msg.into();
        self.rule(|v| is_valid_email(v), msg)
    }

    /// Require the value to equal another value.
    pub fn equals(self, other: String, msg: impl Into<String>) -> Self {
        let msg = msg.into();
        self.rule(move |v| v == &other, msg)
    }

    /// Require the value to contain a substring.
    pub fn contains(self, substr: impl Into<String>, msg: impl Into<String>) -> Self {
        let msg = msg.into();
        let substr = substr.into();
        self.rule(move |v| v.contains(&substr), msg)
    }
}

/// Check a string against the registration email grammar.
///
/// `EmailAddress` accepts RFC-valid dotless domains such as `user@localhost`;
/// registration addresses must also carry a dotted domain. Empty input fails.
pub fn is_valid_email(value: &str) -> bool {
    match value.rsplit_once('@') {
        Some((_, domain)) => {
            email_address::EmailAddress::is_valid(value) && domain.contains('.')
        }
        None => false,
    }
}
