//! Form validation.
//!
//! This module provides a fluent API for validating form fields. Fields and
//! rules run in declaration order and the first failing rule wins: validation
//! stops there and the result carries exactly that one error. Showing one
//! error at a time is the policy, not a shortcut.
//!
//! # Example
//!
//! ```
//! use formkit::field::TextField;
//! use formkit::validation::Validator;
//!
//! let email = TextField::with_value("someone@example.com");
//! let password = TextField::with_value("secret");
//!
//! let result = Validator::new()
//!     .field(&email, "email")
//!         .email("Please enter a valid email")
//!     .field(&password, "password")
//!         .required("Password is required")
//!         .min_length(5, "Password must be at least 5 characters")
//!     .validate();
//!
//! assert!(result.is_valid());
//! ```

mod result;
mod validatable;
mod validator;

pub use result::{FieldError, ValidationResult};
pub use validatable::Validatable;
pub use validator::{FieldBuilder, Validator, is_valid_email};
