// src/notifier/mod.rs
//! Fire-and-forget toast notifications.
//!
//! Every [`Notifier::notify`] call creates one toast that runs through
//! `Created -> Visible -> Holding -> FadingOut -> Removed` on its own timer.
//! Toasts never wait on, replace or cancel each other.
mod toast;

pub use toast::{Toast, ToastContainer, ToastObserver, ToastState, ToastTiming};

use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::time::{sleep_until, Instant};

#[derive(Clone)]
pub struct Notifier {
    container: ToastContainer,
    timing: ToastTiming,
    observers: Vec<Arc<dyn ToastObserver>>,
    next_id: Arc<AtomicU64>,
}

impl Notifier {
    pub fn new(timing: ToastTiming) -> Self {
        Self {
            container: ToastContainer::new(),
            timing,
            observers: Vec::new(),
            next_id: Arc::new(AtomicU64::new(1)),
        }
    }

    pub fn with_observer(mut self, observer: Arc<dyn ToastObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    pub fn container(&self) -> &ToastContainer {
        &self.container
    }

    pub fn timing(&self) -> ToastTiming {
        self.timing
    }

    /// Shows `message` as a new toast and returns immediately.
    ///
    /// Removal is scheduled on the current tokio runtime. Without one the
    /// toast is created and removed on the spot.
    pub fn notify(&self, message: impl Into<String>) {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let created_at = Instant::now();
        let toast = Toast {
            id,
            message: message.into(),
            state: ToastState::Created,
        };

        self.container.push(toast.clone());
        emit(&self.observers, &toast);

        match Handle::try_current() {
            Ok(handle) => {
                let lifecycle = Lifecycle {
                    id,
                    created_at,
                    timing: self.timing,
                    container: self.container.clone(),
                    observers: self.observers.clone(),
                };
                handle.spawn(lifecycle.run());
            }
            Err(e) => {
                log::warn!("No async runtime for toast {}, dropping it: {}", id, e);
                if let Some(removed) = self.container.remove(id) {
                    emit(&self.observers, &removed);
                }
            }
        }
    }
}

struct Lifecycle {
    id: u64,
    created_at: Instant,
    timing: ToastTiming,
    container: ToastContainer,
    observers: Vec<Arc<dyn ToastObserver>>,
}

impl Lifecycle {
    async fn run(self) {
        self.advance(ToastState::Visible);

        sleep_until(self.created_at + self.timing.fade_in).await;
        self.advance(ToastState::Holding);

        sleep_until(self.created_at + self.timing.hold_until).await;
        self.advance(ToastState::FadingOut);

        sleep_until(self.created_at + self.timing.total).await;
        if let Some(removed) = self.container.remove(self.id) {
            log::trace!("toast {} removed", self.id);
            emit(&self.observers, &removed);
        }
    }

    fn advance(&self, state: ToastState) {
        if let Some(toast) = self.container.set_state(self.id, state) {
            log::trace!("toast {} -> {:?}", self.id, state);
            emit(&self.observers, &toast);
        }
    }
}

// A panicking observer is logged and skipped; notify never unwinds
fn emit(observers: &[Arc<dyn ToastObserver>], toast: &Toast) {
    for observer in observers {
        if panic::catch_unwind(AssertUnwindSafe(|| observer.on_transition(toast))).is_err() {
            log::warn!("toast observer panicked on toast {} ({:?})", toast.id, toast.state);
        }
    }
}
