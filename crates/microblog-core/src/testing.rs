//! Test doubles for the ports.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use async_trait::async_trait;

use crate::error::StorageError;
use crate::ports::{Continuation, KeyValueStore, Scheduler, TimerHandle};

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// In-memory store whose writes can be made to fail.
#[derive(Default)]
pub struct FakeStore {
    values: Mutex<HashMap<String, String>>,
    write_fault: Mutex<Option<StorageError>>,
}

impl FakeStore {
    pub fn raw(&self, key: &str) -> Option<String> {
        lock(&self.values).get(key).cloned()
    }

    pub fn put(&self, key: &str, value: &str) {
        lock(&self.values).insert(key.to_string(), value.to_string());
    }

    pub fn fail_writes(&self, fault: StorageError) {
        *lock(&self.write_fault) = Some(fault);
    }
}

#[async_trait]
impl KeyValueStore for FakeStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.raw(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if let Some(fault) = lock(&self.write_fault).clone() {
            return Err(fault);
        }
        self.put(key, value);
        Ok(())
    }
}

struct Pending {
    id: u64,
    due: Duration,
    task: Continuation,
}

#[derive(Default)]
struct Timeline {
    now: Duration,
    next_id: u64,
    pending: Vec<Pending>,
}

/// Scheduler driven by hand: continuations run only inside `advance`.
#[derive(Default)]
pub struct ManualScheduler {
    timeline: std::sync::Arc<Mutex<Timeline>>,
}

impl ManualScheduler {
    /// Move the clock forward, running every continuation that falls due,
    /// earliest first.
    pub async fn advance(&self, by: Duration) {
        let target = lock(&self.timeline).now + by;
        loop {
            let next = {
                let mut timeline = lock(&self.timeline);
                let due = timeline
                    .pending
                    .iter()
                    .enumerate()
                    .filter(|(_, p)| p.due <= target)
                    .min_by_key(|(_, p)| (p.due, p.id))
                    .map(|(i, _)| i);
                match due {
                    Some(i) => {
                        let pending = timeline.pending.remove(i);
                        timeline.now = pending.due;
                        Some(pending.task)
                    }
                    None => {
                        timeline.now = target;
                        None
                    }
                }
            };
            match next {
                Some(task) => task.await,
                None => break,
            }
        }
    }

    pub fn pending(&self) -> usize {
        lock(&self.timeline).pending.len()
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: Continuation) -> TimerHandle {
        let mut timeline = lock(&self.timeline);
        let id = timeline.next_id;
        timeline.next_id += 1;
        let due = timeline.now + delay;
        timeline.pending.push(Pending { id, due, task });

        let shared = self.timeline.clone();
        TimerHandle::new(move || {
            lock(&shared).pending.retain(|p| p.id != id);
        })
    }
}
