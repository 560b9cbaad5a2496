//! HTTP handlers and route configuration.

mod compose;
mod health;
mod posts;

use actix_web::{HttpResponse, web};
use askama::Template;

use crate::middleware::AppResult;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(posts::index))
        .route("/new", web::get().to(compose::new_post_form))
        .route("/new", web::post().to(compose::submit_post))
        .route("/posts/{id}/delete", web::get().to(posts::confirm_delete))
        .route("/posts/{id}/delete", web::post().to(posts::delete_post))
        .service(web::scope("/api").route("/health", web::get().to(health::health_check)));
}

fn html(page: &impl Template) -> AppResult<HttpResponse> {
    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(page.render()?))
}
