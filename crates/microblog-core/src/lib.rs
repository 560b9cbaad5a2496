//! # MicroBlog Core
//!
//! The domain layer of MicroBlog.
//! Posts, the persistence and scheduling ports, the storage adapter and
//! repository built on those ports, pure view rendering, and the presenters
//! that drive the list and submission views. No infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod presenter;
pub mod repository;
pub mod storage;
pub mod view;

#[cfg(test)]
pub(crate) mod testing;

pub use error::{RepoError, StorageError};
pub use repository::StoredPostRepository;
