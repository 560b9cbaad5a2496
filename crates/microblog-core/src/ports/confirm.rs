/// Interactive accept/cancel prompt.
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

/// A decision already taken by the user, e.g. submitted through a form.
impl Confirm for bool {
    fn confirm(&self, _prompt: &str) -> bool {
        *self
    }
}
