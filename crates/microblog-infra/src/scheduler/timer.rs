//! Timer-based scheduler on the tokio runtime.

use std::time::Duration;

use tokio::runtime::Handle;

use microblog_core::ports::{Continuation, Scheduler, TimerHandle};

/// Runs each continuation on its own task after sleeping for the delay.
/// Cancelling aborts the task.
#[derive(Clone)]
pub struct TokioScheduler {
    runtime: Handle,
}

impl TokioScheduler {
    /// Bind to the runtime of the calling context.
    ///
    /// Panics when called outside a tokio runtime.
    pub fn current() -> Self {
        Self {
            runtime: Handle::current(),
        }
    }
}

impl Scheduler for TokioScheduler {
    fn schedule(&self, delay: Duration, task: Continuation) -> TimerHandle {
        let join = self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            task.await;
        });

        tracing::trace!(delay_ms = delay.as_millis() as u64, "Continuation scheduled");
        TimerHandle::new(move || join.abort())
    }
}
