//! Pure rendering: domain state in, render instructions out.
//!
//! Nothing here touches storage or timers, so every view can be checked
//! directly against a list of posts.

mod excerpt;
mod form;
mod list;
mod notification;

pub use excerpt::{EXCERPT_CHARS, Excerpt};
pub use form::{FormStatus, Redirect};
pub use list::{
    EMPTY_CTA_LABEL, EMPTY_MESSAGE, ListView, NEW_POST_HREF, PostCard, format_date, render_list,
};
pub use notification::{Notification, NotificationKind};
