//! Askama page templates for the two views.

use askama::Template;

use microblog_core::presenter::{DELETE_PROMPT, LIST_VIEW_HREF};
use microblog_core::view::{
    EMPTY_CTA_LABEL, EMPTY_MESSAGE, FormStatus, ListView, NEW_POST_HREF, Notification, PostCard,
    Redirect,
};

/// `<meta http-equiv="refresh">` content for a delayed navigation.
///
/// Browsers only honour whole seconds, so the delay is rounded up.
fn refresh(redirect: &Redirect) -> String {
    let secs = redirect.after.as_millis().div_ceil(1000);
    format!("{};url={}", secs, redirect.to)
}

#[derive(Template)]
#[template(path = "list.html")]
pub struct ListPage {
    pub cards: Vec<PostCard>,
    pub notification: Option<Notification>,
    pub refresh: Option<String>,
    pub empty_message: &'static str,
    pub empty_cta: &'static str,
    pub new_post_href: &'static str,
}

impl ListPage {
    pub fn new(view: ListView, notification: Option<Notification>) -> Self {
        let cards = match view {
            ListView::Empty => Vec::new(),
            ListView::Populated(cards) => cards,
        };

        Self {
            cards,
            notification,
            refresh: None,
            empty_message: EMPTY_MESSAGE,
            empty_cta: EMPTY_CTA_LABEL,
            new_post_href: NEW_POST_HREF,
        }
    }

    pub fn reload_after(mut self, redirect: &Redirect) -> Self {
        self.refresh = Some(refresh(redirect));
        self
    }
}

#[derive(Template)]
#[template(path = "new.html")]
pub struct NewPostPage {
    pub title: String,
    pub author: String,
    pub content: String,
    pub status_message: Option<String>,
    pub status_class: &'static str,
    pub refresh: Option<String>,
    pub list_href: &'static str,
}

impl NewPostPage {
    pub fn blank(author: Option<String>) -> Self {
        Self {
            title: String::new(),
            author: author.unwrap_or_default(),
            content: String::new(),
            status_message: None,
            status_class: "",
            refresh: None,
            list_href: LIST_VIEW_HREF,
        }
    }

    pub fn with_status(mut self, status: &FormStatus, redirect: Option<&Redirect>) -> Self {
        self.status_message = status.message();
        self.status_class = status.css_class();
        self.refresh = redirect.map(refresh);
        self
    }
}

#[derive(Template)]
#[template(path = "confirm.html")]
pub struct ConfirmDeletePage {
    pub id: u64,
    pub prompt: &'static str,
    pub list_href: &'static str,
}

impl ConfirmDeletePage {
    pub fn new(id: u64) -> Self {
        Self {
            id,
            prompt: DELETE_PROMPT,
            list_href: LIST_VIEW_HREF,
        }
    }
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorPage {
    pub status: u16,
    pub message: String,
    pub list_href: &'static str,
}

impl ErrorPage {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            list_href: LIST_VIEW_HREF,
        }
    }
}
