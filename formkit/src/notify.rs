//! Change notification for observable state.
//!
//! State cells and fields carry a `ChangeHandle`. Mutations call `notify`,
//! which fans out to every subscribed listener on the mutating thread. A
//! rendering layer typically subscribes a listener that schedules a redraw.

use std::sync::{Arc, Mutex};

/// Callback invoked when an observed value changes.
pub type Listener = Arc<dyn Fn() + Send + Sync>;

/// Handle for publishing change notifications.
///
/// Cloning shares the listener list.
#[derive(Clone, Default)]
pub struct ChangeHandle {
    listeners: Arc<Mutex<Vec<Listener>>>,
}

impl ChangeHandle {
    /// Create a new handle with no listeners.
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe a listener. It fires on every subsequent change.
    pub fn subscribe(&self, listener: Listener) {
        if let Ok(mut guard) = self.listeners.lock() {
            guard.push(listener);
        }
    }

    /// Notify all listeners.
    ///
    /// A poisoned listener list drops the notification rather than panicking.
    pub fn notify(&self) {
        // Snapshot the list first so a listener may subscribe without deadlock.
        let listeners: Vec<Listener> = match self.listeners.lock() {
            Ok(guard) => guard.clone(),
            Err(_) => return,
        };
        for listener in listeners {
            listener();
        }
    }
}

impl std::fmt::Debug for ChangeHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.listeners.lock().map(|guard| guard.len()).unwrap_or(0);
        f.debug_struct("ChangeHandle")
            .field("listeners", &count)
            .finish()
    }
}
