use std::time::Duration;

/// Status line of the submission form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Idle,
    Publishing,
    Published,
    Failed(String),
}

impl FormStatus {
    pub fn message(&self) -> Option<String> {
        match self {
            FormStatus::Idle => None,
            FormStatus::Publishing => Some("Publishing your post...".to_string()),
            FormStatus::Published => {
                Some("Post published successfully! Redirecting to homepage...".to_string())
            }
            FormStatus::Failed(reason) => Some(format!("Error: {reason}")),
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            FormStatus::Idle => "",
            FormStatus::Publishing => "loading",
            FormStatus::Published => "success",
            FormStatus::Failed(_) => "error",
        }
    }
}

/// Navigate to `to` once `after` has elapsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    pub to: String,
    pub after: Duration,
}
