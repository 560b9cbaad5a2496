//! Application state - shared across all handlers.

use std::sync::Arc;

use microblog_core::StoredPostRepository;
use microblog_core::ports::{KeyValueStore, PostRepository, Scheduler};
use microblog_core::presenter::{ListPresenter, Notifier, SubmissionHandler};
use microblog_infra::{FileStore, InMemoryStore, TokioScheduler};

use crate::config::StorageConfig;

/// Shared application state. There is a single user, so the presenters
/// hold the one and only view state.
#[derive(Clone)]
pub struct AppState {
    pub list: ListPresenter,
    pub submit: SubmissionHandler,
    pub storage_backend: &'static str,
}

impl AppState {
    /// Wire presenters to the configured store.
    ///
    /// Must be called from within the runtime that will run the timers.
    pub fn new(config: &StorageConfig) -> Self {
        let (store, storage_backend): (Arc<dyn KeyValueStore>, &'static str) =
            match &config.data_file {
                Some(path) => {
                    tracing::info!(path = %path.display(), "Using file store");
                    (
                        Arc::new(FileStore::new(path).with_quota(config.quota_bytes)),
                        "file",
                    )
                }
                None => {
                    tracing::warn!(
                        "MICROBLOG_DATA_FILE not set. Posts are kept in memory and lost on restart."
                    );
                    (
                        Arc::new(InMemoryStore::new().with_quota(config.quota_bytes)),
                        "memory",
                    )
                }
            };

        let scheduler: Arc<dyn Scheduler> = Arc::new(TokioScheduler::current());
        let repo = StoredPostRepository::new(store);
        let storage = repo.storage().clone();
        let repo: Arc<dyn PostRepository> = Arc::new(repo);

        let notifier = Notifier::new(scheduler.clone());
        let list = ListPresenter::new(repo.clone(), scheduler, notifier);
        let submit = SubmissionHandler::new(repo, storage);

        tracing::info!("Application state initialized");

        Self {
            list,
            submit,
            storage_backend,
        }
    }
}
