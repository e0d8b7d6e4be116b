//! Form submission state

/// Inline submit state for a form. The contact, review and event forms are
/// the only places a failure surfaces as text instead of being absorbed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SubmitState {
    pub submitting: bool,
    pub error: Option<String>,
    pub success: Option<String>,
}

impl SubmitState {
    pub fn start(&mut self) {
        self.submitting = true;
        self.error = None;
        self.success = None;
    }

    pub fn succeed(&mut self, message: impl Into<String>) {
        self.submitting = false;
        self.success = Some(message.into());
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.submitting = false;
        self.error = Some(message.into());
    }
}
