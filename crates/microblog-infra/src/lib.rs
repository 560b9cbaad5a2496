//! # MicroBlog Infrastructure
//!
//! Concrete implementations of the ports defined in `microblog-core`:
//! key-value stores (in-memory and JSON file) and a tokio timer scheduler.

pub mod scheduler;
pub mod storage;

pub use scheduler::TokioScheduler;
pub use storage::{DEFAULT_QUOTA_BYTES, FileStore, InMemoryStore};
