use std::sync::{Arc, Mutex};
use std::time::Duration;

use super::lock;
use crate::ports::{Scheduler, TimerHandle};
use crate::view::{Notification, NotificationKind};

/// How long a notification stays visible.
pub const NOTIFICATION_TTL: Duration = Duration::from_millis(3000);

#[derive(Default)]
struct NotifierState {
    current: Option<Notification>,
    generation: u64,
    dismissal: Option<TimerHandle>,
}

/// Shows one notification at a time and hides it after `NOTIFICATION_TTL`.
///
/// A new message replaces the visible one and cancels its pending dismissal,
/// so only the newest message's timer can hide the element.
#[derive(Clone)]
pub struct Notifier {
    state: Arc<Mutex<NotifierState>>,
    scheduler: Arc<dyn Scheduler>,
}

impl Notifier {
    pub fn new(scheduler: Arc<dyn Scheduler>) -> Self {
        Self {
            state: Arc::new(Mutex::new(NotifierState::default())),
            scheduler,
        }
    }

    pub fn show(&self, message: impl Into<String>, kind: NotificationKind) {
        let mut state = lock(&self.state);
        if let Some(stale) = state.dismissal.take() {
            stale.cancel();
        }

        state.generation += 1;
        let generation = state.generation;
        state.current = Some(Notification {
            message: message.into(),
            kind,
        });

        let shared = self.state.clone();
        let dismissal = self.scheduler.schedule(
            NOTIFICATION_TTL,
            Box::pin(async move {
                let mut state = lock(&shared);
                // A cancelled timer may already be running.
                if state.generation == generation {
                    state.current = None;
                    state.dismissal = None;
                }
            }),
        );
        state.dismissal = Some(dismissal);
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(message, NotificationKind::Success);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(message, NotificationKind::Error);
    }

    /// The visible notification, if any.
    pub fn current(&self) -> Option<Notification> {
        lock(&self.state).current.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ManualScheduler;

    fn notifier() -> (Arc<ManualScheduler>, Notifier) {
        let scheduler = Arc::new(ManualScheduler::default());
        (scheduler.clone(), Notifier::new(scheduler))
    }

    #[tokio::test]
    async fn test_dismissed_after_ttl() {
        let (scheduler, notifier) = notifier();
        notifier.success("Saved");

        scheduler.advance(Duration::from_millis(2999)).await;
        assert_eq!(notifier.current().unwrap().message, "Saved");

        scheduler.advance(Duration::from_millis(1)).await;
        assert!(notifier.current().is_none());
    }

    #[tokio::test]
    async fn test_newer_message_survives_stale_timer() {
        let (scheduler, notifier) = notifier();
        notifier.success("first");

        scheduler.advance(Duration::from_millis(2000)).await;
        notifier.error("second");
        assert_eq!(scheduler.pending(), 1);

        // The first message's deadline passes.
        scheduler.advance(Duration::from_millis(1500)).await;
        let current = notifier.current().unwrap();
        assert_eq!(current.message, "second");
        assert_eq!(current.kind, NotificationKind::Error);
        assert_eq!(current.icon(), "exclamation-circle");

        scheduler.advance(Duration::from_millis(1500)).await;
        assert!(notifier.current().is_none());
    }
}
