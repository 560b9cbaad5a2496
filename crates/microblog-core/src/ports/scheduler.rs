use std::fmt;
use std::time::Duration;

use futures::future::BoxFuture;

/// Work to run once a deadline has passed.
pub type Continuation = BoxFuture<'static, ()>;

/// Deferred execution of continuations after a fixed delay.
pub trait Scheduler: Send + Sync {
    /// Run `task` after `delay`. The returned handle can cancel it while it
    /// is still pending.
    fn schedule(&self, delay: Duration, task: Continuation) -> TimerHandle;
}

/// Cancellation token for a scheduled continuation.
///
/// Dropping the handle leaves the continuation scheduled.
pub struct TimerHandle {
    cancel: Option<Box<dyn FnOnce() + Send>>,
}

impl TimerHandle {
    pub fn new(cancel: impl FnOnce() + Send + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    pub fn cancel(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl fmt::Debug for TimerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimerHandle")
            .field("cancellable", &self.cancel.is_some())
            .finish()
    }
}
