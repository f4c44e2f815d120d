// src/notifier/toast.rs
use serde::Serialize;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

/// Lifecycle of a single toast. Transitions are driven by time only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ToastState {
    Created,
    Visible,
    Holding,
    FadingOut,
    Removed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub state: ToastState,
}

/// Offsets from creation at which a toast changes state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastTiming {
    pub fade_in: Duration,
    pub hold_until: Duration,
    pub total: Duration,
}

impl ToastTiming {
    /// Offsets are forced to be non-decreasing.
    pub fn new(fade_in: Duration, hold_until: Duration, total: Duration) -> Self {
        let hold_until = hold_until.max(fade_in);
        let total = total.max(hold_until);
        Self { fade_in, hold_until, total }
    }
}

impl Default for ToastTiming {
    fn default() -> Self {
        Self {
            fade_in: Duration::from_millis(300),
            hold_until: Duration::from_millis(2700),
            total: Duration::from_millis(3000),
        }
    }
}

/// Receives every state change of every toast.
pub trait ToastObserver: Send + Sync {
    fn on_transition(&self, toast: &Toast);
}

/// Toasts currently on screen, shared between the notifier's timers and
/// whoever renders them.
#[derive(Debug, Clone, Default)]
pub struct ToastContainer {
    toasts: Arc<Mutex<Vec<Toast>>>,
}

impl ToastContainer {
    pub fn new() -> Self {
        Self::default()
    }

    // A panicking observer must not take the container down with it
    fn lock(&self) -> MutexGuard<'_, Vec<Toast>> {
        self.toasts.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub(crate) fn push(&self, toast: Toast) {
        self.lock().push(toast);
    }

    pub(crate) fn set_state(&self, id: u64, state: ToastState) -> Option<Toast> {
        let mut toasts = self.lock();
        let toast = toasts.iter_mut().find(|t| t.id == id)?;
        toast.state = state;
        Some(toast.clone())
    }

    pub(crate) fn remove(&self, id: u64) -> Option<Toast> {
        let mut toasts = self.lock();
        let index = toasts.iter().position(|t| t.id == id)?;
        let mut toast = toasts.remove(index);
        toast.state = ToastState::Removed;
        Some(toast)
    }

    pub fn get(&self, id: u64) -> Option<Toast> {
        self.lock().iter().find(|t| t.id == id).cloned()
    }

    /// Copy of the live toasts in creation order.
    pub fn snapshot(&self) -> Vec<Toast> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}
