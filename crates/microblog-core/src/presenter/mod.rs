//! Presenters - the stateful side of the two views.
//!
//! Each presenter owns what its view currently shows and reacts to user
//! events by calling the repository and scheduling deferred work.

mod list;
mod notify;
mod submit;

use std::sync::{Mutex, MutexGuard};

pub use list::{DELETE_PROMPT, DELETED_MESSAGE, DeleteOutcome, FADE_OUT, ListPresenter};
pub use notify::{NOTIFICATION_TTL, Notifier};
pub use submit::{LIST_VIEW_HREF, REDIRECT_DELAY, SubmissionHandler, SubmitOutcome};

/// Presenter state is never left half-updated, so a poisoned lock is still usable.
pub(crate) fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
