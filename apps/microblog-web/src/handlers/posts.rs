//! List view: rendering and confirmed deletion.

use actix_web::{HttpResponse, http::header, web};
use serde::Deserialize;

use microblog_core::domain::PostId;
use microblog_core::presenter::{DeleteOutcome, FADE_OUT, LIST_VIEW_HREF};
use microblog_core::view::Redirect;

use super::html;
use crate::middleware::{AppError, AppResult};
use crate::pages::{ConfirmDeletePage, ListPage};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct DeleteForm {
    pub confirm: String,
}

/// GET /
pub async fn index(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let view = state.list.load().await?;
    html(&ListPage::new(view, state.list.notifier().current()))
}

/// GET /posts/{id}/delete
pub async fn confirm_delete(path: web::Path<PostId>) -> AppResult<HttpResponse> {
    html(&ConfirmDeletePage::new(path.into_inner()))
}

/// POST /posts/{id}/delete
///
/// On accept the list is shown with the card fading out and reloads once
/// the fade is over.
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<PostId>,
    form: web::Form<DeleteForm>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let accepted = match form.confirm.as_str() {
        "yes" => true,
        "no" => false,
        other => {
            return Err(AppError::BadRequest(format!(
                "confirm must be 'yes' or 'no', got '{}'",
                other
            )));
        }
    };

    match state.list.request_delete(id, &accepted).await? {
        DeleteOutcome::Cancelled => Ok(HttpResponse::SeeOther()
            .insert_header((header::LOCATION, LIST_VIEW_HREF))
            .finish()),
        DeleteOutcome::Deleted => {
            let page = ListPage::new(state.list.view(), state.list.notifier().current())
                .reload_after(&Redirect {
                    to: LIST_VIEW_HREF.to_string(),
                    after: FADE_OUT,
                });
            html(&page)
        }
    }
}
