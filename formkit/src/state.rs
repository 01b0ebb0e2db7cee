use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use crate::notify::ChangeHandle;

/// Reactive state wrapper with interior mutability.
///
/// `State<T>` provides thread-safe state management. It uses `Arc<RwLock<T>>`
/// internally, making it cheap to clone; clones share the same value.
///
/// Consumers can observe changes two ways: pull-style via the dirty flag
/// ([`is_dirty`](State::is_dirty) / [`clear_dirty`](State::clear_dirty)), or
/// push-style via [`watch`](State::watch).
///
/// # Example
///
/// ```
/// use formkit::state::State;
///
/// let counter = State::new(0);
/// counter.update(|v| *v += 1);
/// assert_eq!(counter.get(), 1);
/// assert!(counter.is_dirty());
/// ```
#[derive(Debug)]
pub struct State<T> {
    inner: Arc<RwLock<T>>,
    dirty: Arc<AtomicBool>,
    changes: ChangeHandle,
}

impl<T> State<T> {
    /// Create a new state with the given value
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(RwLock::new(value)),
            dirty: Arc::new(AtomicBool::new(false)),
            changes: ChangeHandle::new(),
        }
    }

    /// Get a clone of the current value
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.inner
            .read()
            .map(|guard| guard.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    /// Set a new value
    pub fn set(&self, value: T) {
        if let Ok(mut guard) = self.inner.write() {
            *guard = value;
            drop(guard);
            self.dirty.store(true, Ordering::SeqCst);
            self.changes.notify();
        }
    }

    /// Update the value using a closure
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut T),
    {
        if let Ok(mut guard) = self.inner.write() {
            f(&mut guard);
            drop(guard);
            self.dirty.store(true, Ordering::SeqCst);
            self.changes.notify();
        }
    }

    /// Subscribe a listener invoked after every `set`/`update`.
    pub fn watch<F>(&self, listener: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.changes.subscribe(Arc::new(listener));
    }

    /// Check if the state has been modified since last check
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

impl<T> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
            changes: self.changes.clone(),
        }
    }
}

impl<T: Default> Default for State<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
