//! Scheduler implementations.

mod timer;

pub use timer::TokioScheduler;
