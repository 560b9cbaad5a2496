use std::sync::{Arc, Mutex};
use std::time::Duration;

use super::lock;
use crate::domain::{NewPost, Post};
use crate::error::{RepoError, StorageError};
use crate::ports::PostRepository;
use crate::storage::StorageAdapter;
use crate::view::{FormStatus, Redirect};

/// Delay between a successful submission and navigating to the list view.
pub const REDIRECT_DELAY: Duration = Duration::from_millis(1500);

pub const LIST_VIEW_HREF: &str = "/";

/// Result of one form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Published { post: Post, redirect: Redirect },
    Failed { reason: String },
}

impl SubmitOutcome {
    pub fn status(&self) -> FormStatus {
        match self {
            SubmitOutcome::Published { .. } => FormStatus::Published,
            SubmitOutcome::Failed { reason } => FormStatus::Failed(reason.clone()),
        }
    }

    pub fn redirect(&self) -> Option<&Redirect> {
        match self {
            SubmitOutcome::Published { redirect, .. } => Some(redirect),
            SubmitOutcome::Failed { .. } => None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
enum SubmitError {
    #[error(transparent)]
    Repo(#[from] RepoError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Handles the submission form: author pre-fill and publishing.
#[derive(Clone)]
pub struct SubmissionHandler {
    repo: Arc<dyn PostRepository>,
    storage: StorageAdapter,
    status: Arc<Mutex<FormStatus>>,
}

impl SubmissionHandler {
    pub fn new(repo: Arc<dyn PostRepository>, storage: StorageAdapter) -> Self {
        Self {
            repo,
            storage,
            status: Arc::new(Mutex::new(FormStatus::Idle)),
        }
    }

    /// Author name to pre-fill the form with.
    pub async fn prefill_author(&self) -> Result<Option<String>, StorageError> {
        self.storage.last_author().await
    }

    /// Current status line of the form.
    pub fn status(&self) -> FormStatus {
        lock(&self.status).clone()
    }

    /// Publish the submitted fields.
    ///
    /// Any fault is reported in the outcome instead of being returned, and
    /// leaves no redirect behind.
    pub async fn submit(&self, draft: NewPost) -> SubmitOutcome {
        self.set_status(FormStatus::Publishing);

        let outcome = match self.publish(draft).await {
            Ok(post) => {
                tracing::info!(post_id = post.id, "Post published");
                SubmitOutcome::Published {
                    post,
                    redirect: Redirect {
                        to: LIST_VIEW_HREF.to_string(),
                        after: REDIRECT_DELAY,
                    },
                }
            }
            Err(e) => {
                tracing::error!(error = %e, "Error publishing post");
                SubmitOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        };

        self.set_status(outcome.status());
        outcome
    }

    async fn publish(&self, draft: NewPost) -> Result<Post, SubmitError> {
        let author = draft.author.clone();
        let post = self.repo.add(draft).await?;
        self.storage.remember_author(&author).await?;
        Ok(post)
    }

    fn set_status(&self, status: FormStatus) {
        *lock(&self.status) = status;
    }
}
