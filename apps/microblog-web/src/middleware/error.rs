//! Error handling - every failure renders the HTML error page.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use askama::Template;

use microblog_core::{RepoError, StorageError};

use crate::pages::ErrorPage;

/// Application-level error type that converts to an error page.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let message = match self {
            AppError::BadRequest(detail) => detail.clone(),
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                "Something went wrong while reading or writing posts.".to_string()
            }
        };

        match ErrorPage::new(status.as_u16(), message).render() {
            Ok(body) => HttpResponse::build(status)
                .content_type("text/html; charset=utf-8")
                .body(body),
            Err(e) => {
                tracing::error!("Error page failed to render: {}", e);
                HttpResponse::build(status).finish()
            }
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Storage(e) => e.into(),
            RepoError::Corrupt(msg) => {
                tracing::error!("Stored posts are unreadable: {}", msg);
                AppError::Internal(format!("corrupt post collection: {}", msg))
            }
            RepoError::IdsExhausted(_) | RepoError::Serialization(_) => {
                AppError::Internal(err.to_string())
            }
        }
    }
}

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        tracing::error!("Storage error: {}", err);
        AppError::Internal(err.to_string())
    }
}

impl From<askama::Error> for AppError {
    fn from(err: askama::Error) -> Self {
        AppError::Internal(format!("template: {}", err))
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
