use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use super::lock;
use super::notify::Notifier;
use crate::domain::{Post, PostId};
use crate::error::RepoError;
use crate::ports::{Confirm, PostRepository, Scheduler};
use crate::view::{ListView, render_list};

/// Length of the card fade-out before a deleted post leaves the list.
pub const FADE_OUT: Duration = Duration::from_millis(300);

pub const DELETE_PROMPT: &str = "Are you sure you want to delete this post?";
pub const DELETED_MESSAGE: &str = "Post deleted successfully!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Cancelled,
    Deleted,
}

#[derive(Default)]
struct ListState {
    displayed: Vec<Post>,
    fading: HashSet<PostId>,
}

/// Drives the list view: loading, rendering and confirmed deletion.
#[derive(Clone)]
pub struct ListPresenter {
    repo: Arc<dyn PostRepository>,
    scheduler: Arc<dyn Scheduler>,
    notifier: Notifier,
    state: Arc<Mutex<ListState>>,
}

impl ListPresenter {
    pub fn new(
        repo: Arc<dyn PostRepository>,
        scheduler: Arc<dyn Scheduler>,
        notifier: Notifier,
    ) -> Self {
        Self {
            repo,
            scheduler,
            notifier,
            state: Arc::new(Mutex::new(ListState::default())),
        }
    }

    /// Reload every post from the repository and render.
    pub async fn load(&self) -> Result<ListView, RepoError> {
        let posts = self.repo.list().await?;

        let mut state = lock(&self.state);
        state.displayed = posts.into_vec();
        state.fading.clear();
        Ok(render_list(&state.displayed, &state.fading))
    }

    /// Render what is currently displayed, without touching storage.
    pub fn view(&self) -> ListView {
        let state = lock(&self.state);
        render_list(&state.displayed, &state.fading)
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    /// Delete `id` once the user accepts the prompt.
    ///
    /// The card fades for `FADE_OUT`, is then removed from the display and a
    /// success notification follows. Declining changes nothing.
    pub async fn request_delete<C>(
        &self,
        id: PostId,
        confirm: &C,
    ) -> Result<DeleteOutcome, RepoError>
    where
        C: Confirm + Sync + ?Sized,
    {
        if !confirm.confirm(DELETE_PROMPT) {
            tracing::debug!(post_id = id, "Delete cancelled");
            return Ok(DeleteOutcome::Cancelled);
        }

        self.repo.delete(id).await?;
        lock(&self.state).fading.insert(id);

        let state = self.state.clone();
        let notifier = self.notifier.clone();
        self.scheduler.schedule(
            FADE_OUT,
            Box::pin(async move {
                {
                    let mut state = lock(&state);
                    state.displayed.retain(|post| post.id != id);
                    state.fading.remove(&id);
                }
                notifier.success(DELETED_MESSAGE);
            }),
        );

        Ok(DeleteOutcome::Deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NewPost;
    use crate::repository::StoredPostRepository;
    use crate::testing::{FakeStore, ManualScheduler};

    struct Prompt {
        answer: bool,
        asked: Mutex<Option<String>>,
    }

    impl Confirm for Prompt {
        fn confirm(&self, prompt: &str) -> bool {
            *lock(&self.asked) = Some(prompt.to_string());
            self.answer
        }
    }

    fn presenter() -> (Arc<ManualScheduler>, Arc<StoredPostRepository>, ListPresenter) {
        let scheduler = Arc::new(ManualScheduler::default());
        let repo = Arc::new(StoredPostRepository::new(Arc::new(FakeStore::default())));
        let notifier = Notifier::new(scheduler.clone());
        let presenter = ListPresenter::new(repo.clone(), scheduler.clone(), notifier);
        (scheduler, repo, presenter)
    }

    #[tokio::test]
    async fn test_load_shows_seed_post() {
        let (_, _, presenter) = presenter();
        let view = presenter.load().await.unwrap();
        assert_eq!(view.cards().len(), 1);
        assert_eq!(view.cards()[0].title, "Getting Started with MicroBlog");
    }

    #[tokio::test]
    async fn test_cancel_changes_nothing() {
        let (scheduler, repo, presenter) = presenter();
        let before = presenter.load().await.unwrap();
        let prompt = Prompt {
            answer: false,
            asked: Mutex::new(None),
        };

        let outcome = presenter.request_delete(1, &prompt).await.unwrap();

        assert_eq!(outcome, DeleteOutcome::Cancelled);
        assert_eq!(lock(&prompt.asked).as_deref(), Some(DELETE_PROMPT));
        assert_eq!(presenter.view(), before);
        assert_eq!(repo.list().await.unwrap().len(), 1);
        assert_eq!(scheduler.pending(), 0);
    }

    #[tokio::test]
    async fn test_deleting_last_post_empties_view() {
        let (scheduler, repo, presenter) = presenter();
        presenter.load().await.unwrap();

        let outcome = presenter.request_delete(1, &true).await.unwrap();
        assert_eq!(outcome, DeleteOutcome::Deleted);
        assert!(repo.list().await.unwrap().is_empty());

        // Still on screen while fading.
        let view = presenter.view();
        assert!(view.cards()[0].fading);
        assert!(presenter.notifier().current().is_none());

        scheduler.advance(FADE_OUT).await;
        assert!(presenter.view().is_empty());
        assert_eq!(
            presenter.notifier().current().unwrap().message,
            DELETED_MESSAGE
        );
    }

    #[tokio::test]
    async fn test_delete_keeps_other_cards() {
        let (scheduler, repo, presenter) = presenter();
        repo.add(NewPost {
            title: "Hi".to_string(),
            author: "A".to_string(),
            content: "Hello".to_string(),
        })
        .await
        .unwrap();
        presenter.load().await.unwrap();

        presenter.request_delete(1, &true).await.unwrap();
        scheduler.advance(FADE_OUT).await;

        let view = presenter.view();
        assert_eq!(view.cards().len(), 1);
        assert_eq!(view.cards()[0].id, 2);
        assert!(!view.cards()[0].fading);
    }
}
