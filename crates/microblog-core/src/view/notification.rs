/// Whether a notification reports success or failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// A transient icon + text message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
}

impl Notification {
    pub fn icon(&self) -> &'static str {
        match self.kind {
            NotificationKind::Success => "check-circle",
            NotificationKind::Error => "exclamation-circle",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self.kind {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
        }
    }
}
