//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod confirm;
mod repository;
mod scheduler;
mod storage;

pub use confirm::Confirm;
pub use repository::PostRepository;
pub use scheduler::{Continuation, Scheduler, TimerHandle};
pub use storage::KeyValueStore;
