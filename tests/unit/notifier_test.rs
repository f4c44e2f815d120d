use std::sync::{Arc, Mutex};
use std::time::Duration;

use rust_passgen::notifier::{Notifier, Toast, ToastObserver, ToastState, ToastTiming};
use tokio::time::sleep;

#[derive(Default)]
struct Removals {
    ids: Mutex<Vec<u64>>,
}

impl ToastObserver for Removals {
    fn on_transition(&self, toast: &Toast) {
        if toast.state == ToastState::Removed {
            self.ids.lock().unwrap().push(toast.id);
        }
    }
}

#[tokio::test(start_paused = true)]
async fn burst_of_toasts_each_removed_after_own_duration() {
    let removals = Arc::new(Removals::default());
    let notifier = Notifier::new(ToastTiming::default()).with_observer(removals.clone());

    for i in 0..5 {
        notifier.notify(format!("message {}", i));
        sleep(Duration::from_millis(100)).await;
    }
    // t = 500, all five live
    assert_eq!(notifier.container().len(), 5);

    // t = 3150: the first two (created at 0 and 100) are gone
    sleep(Duration::from_millis(2650)).await;
    assert_eq!(removals.ids.lock().unwrap().clone(), vec![1, 2]);
    assert_eq!(notifier.container().len(), 3);

    sleep(Duration::from_millis(400)).await;
    assert!(notifier.container().is_empty());
    assert_eq!(removals.ids.lock().unwrap().clone(), vec![1, 2, 3, 4, 5]);
}

#[tokio::test(start_paused = true)]
async fn custom_timing_is_honoured() {
    let timing = ToastTiming::new(
        Duration::from_millis(100),
        Duration::from_millis(200),
        Duration::from_millis(400),
    );
    let notifier = Notifier::new(timing);

    notifier.notify("quick");
    sleep(Duration::from_millis(250)).await;
    assert_eq!(notifier.container().snapshot()[0].state, ToastState::FadingOut);

    sleep(Duration::from_millis(200)).await;
    assert!(notifier.container().is_empty());
}

#[tokio::test]
async fn notify_returns_immediately_with_toast_registered() {
    let notifier = Notifier::new(ToastTiming::default());
    notifier.notify("Password copied!");

    let toasts = notifier.container().snapshot();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].message, "Password copied!");
}
