//! Submission view: author pre-fill and publishing.

use actix_web::{HttpResponse, web};
use serde::Deserialize;

use microblog_core::domain::NewPost;

use super::html;
use crate::middleware::AppResult;
use crate::pages::NewPostPage;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct PostForm {
    pub title: String,
    pub author: String,
    pub content: String,
}

impl From<PostForm> for NewPost {
    fn from(form: PostForm) -> Self {
        Self {
            title: form.title,
            author: form.author,
            content: form.content,
        }
    }
}

/// GET /new
pub async fn new_post_form(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let author = state.submit.prefill_author().await?;
    html(&NewPostPage::blank(author))
}

/// POST /new
///
/// Faults are shown in the form's status line; the fields keep what was typed.
pub async fn submit_post(
    state: web::Data<AppState>,
    form: web::Form<PostForm>,
) -> AppResult<HttpResponse> {
    let draft: NewPost = form.into_inner().into();
    let outcome = state.submit.submit(draft.clone()).await;

    let page = NewPostPage {
        title: draft.title,
        author: draft.author,
        content: draft.content,
        ..NewPostPage::blank(None)
    }
    .with_status(&outcome.status(), outcome.redirect());
    html(&page)
}
