//! Headless reactive form toolkit.
//!
//! `formkit` holds the state side of a form without any rendering: observable
//! state cells ([`state::State`]), text field state ([`field::TextField`]),
//! change notification ([`notify::ChangeHandle`]), and a fluent validation
//! builder ([`validation::Validator`]).
//!
//! A rendering layer reads snapshots and subscribes to change notifications;
//! this crate never draws anything.

pub mod field;
pub mod notify;
pub mod state;
pub mod validation;

pub mod prelude {
    pub use crate::field::{FieldId, TextField};
    pub use crate::notify::{ChangeHandle, Listener};
    pub use crate::state::State;
    pub use crate::validation::{FieldBuilder, FieldError, Validatable, ValidationResult, Validator};
}
