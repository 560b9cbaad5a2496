//! Cross-cutting HTTP concerns.

pub mod error;

pub use error::{AppError, AppResult};
