use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use crate::notify::ChangeHandle;
use crate::validation::Validatable;

/// Unique identifier for a TextField instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldId(usize);

impl FieldId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for FieldId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__field_{}", self.0)
    }
}

/// Internal state for a TextField
#[derive(Debug, Default)]
struct FieldInner {
    /// Current text value
    value: String,
    /// Placeholder text
    placeholder: String,
    /// Validation error message (if any)
    error: Option<String>,
}

/// A text field with reactive state and no rendering.
///
/// `TextField` manages its own value, placeholder, and validation error slot.
/// It is cheap to clone; clones share the same state. A rendering layer reads
/// the value and error, and pushes edits through [`set_value`](TextField::set_value)
/// or [`push_str`](TextField::push_str).
///
/// Error slots change only through [`set_error`](TextField::set_error) /
/// [`clear_error`](TextField::clear_error) — editing the value leaves the
/// error in place until the next submission decides otherwise.
#[derive(Debug)]
pub struct TextField {
    /// Unique identifier for this field instance
    id: FieldId,
    /// Internal state
    inner: Arc<RwLock<FieldInner>>,
    /// Dirty flag for re-render
    dirty: Arc<AtomicBool>,
    /// Change notification
    changes: ChangeHandle,
}

impl TextField {
    /// Create a new empty field
    pub fn new() -> Self {
        Self {
            id: FieldId::new(),
            inner: Arc::new(RwLock::new(FieldInner::default())),
            dirty: Arc::new(AtomicBool::new(false)),
            changes: ChangeHandle::new(),
        }
    }

    /// Create a field with an initial value
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            id: FieldId::new(),
            inner: Arc::new(RwLock::new(FieldInner {
                value: value.into(),
                ..Default::default()
            })),
            dirty: Arc::new(AtomicBool::new(false)),
            changes: ChangeHandle::new(),
        }
    }

    /// Create a field with a placeholder
    pub fn with_placeholder(placeholder: impl Into<String>) -> Self {
        Self {
            id: FieldId::new(),
            inner: Arc::new(RwLock::new(FieldInner {
                placeholder: placeholder.into(),
                ..Default::default()
            })),
            dirty: Arc::new(AtomicBool::new(false)),
            changes: ChangeHandle::new(),
        }
    }

    /// Get the unique ID for this field
    pub fn id(&self) -> FieldId {
        self.id
    }

    /// Get the ID as a string (for binding by the rendering layer)
    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    /// Get the current text value
    pub fn value(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.value.clone())
            .unwrap_or_default()
    }

    /// Get the placeholder text
    pub fn placeholder(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.placeholder.clone())
            .unwrap_or_default()
    }

    /// Check if the field is empty
    pub fn is_empty(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.value.is_empty())
            .unwrap_or(true)
    }

    /// Get the length of the current value, in code points
    pub fn len(&self) -> usize {
        self.inner
            .read()
            .map(|guard| guard.value.chars().count())
            .unwrap_or(0)
    }

    /// Get the current validation error (if any)
    pub fn error(&self) -> Option<String> {
        self.inner
            .read()
            .map(|guard| guard.error.clone())
            .unwrap_or_default()
    }

    /// Check if the field has a validation error
    pub fn has_error(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.error.is_some())
            .unwrap_or(false)
    }

    // -------------------------------------------------------------------------
    // Write methods
    // -------------------------------------------------------------------------

    /// Set the text value. The error slot is left untouched.
    pub fn set_value(&self, value: impl Into<String>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.value = value.into();
            drop(guard);
            self.mark_changed();
        }
    }

    /// Append text to the value, as typing does.
    pub fn push_str(&self, text: &str) {
        if let Ok(mut guard) = self.inner.write() {
            guard.value.push_str(text);
            drop(guard);
            self.mark_changed();
        }
    }

    /// Clear the field value. The error slot is left untouched.
    pub fn clear(&self) {
        if let Ok(mut guard) = self.inner.write() {
            guard.value.clear();
            drop(guard);
            self.mark_changed();
        }
    }

    /// Set the placeholder text
    pub fn set_placeholder(&self, placeholder: impl Into<String>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.placeholder = placeholder.into();
            drop(guard);
            self.mark_changed();
        }
    }

    /// Set a validation error on this field
    pub fn set_error(&self, msg: impl Into<String>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.error = Some(msg.into());
            drop(guard);
            self.mark_changed();
        }
    }

    /// Clear the validation error
    pub fn clear_error(&self) {
        if let Ok(mut guard) = self.inner.write() {
            guard.error = None;
            drop(guard);
            self.mark_changed();
        }
    }

    // -------------------------------------------------------------------------
    // Observation
    // -------------------------------------------------------------------------

    /// Subscribe a listener invoked after every value or error change.
    pub fn watch<F>(&self, listener: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.changes.subscribe(Arc::new(listener));
    }

    /// Check if the field changed since last check
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }

    fn mark_changed(&self) {
        self.dirty.store(true, Ordering::SeqCst);
        self.changes.notify();
    }
}

impl Clone for TextField {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
            changes: self.changes.clone(),
        }
    }
}

impl Default for TextField {
    fn default() -> Self {
        Self::new()
    }
}

impl Validatable for TextField {
    type Value = String;

    fn validation_value(&self) -> String {
        self.value()
    }

    fn set_error(&self, msg: impl Into<String>) {
        TextField::set_error(self, msg);
    }

    fn clear_error(&self) {
        TextField::clear_error(self);
    }

    fn has_error(&self) -> bool {
        TextField::has_error(self)
    }

    fn error(&self) -> Option<String> {
        TextField::error(self)
    }

    fn field_id(&self) -> String {
        self.id_string()
    }
}
