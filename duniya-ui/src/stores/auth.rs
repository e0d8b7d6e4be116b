//! Authentication state store

/// Progress of an authentication attempt
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthStatus {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed,
}

/// State for the login/signup views
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub status: AuthStatus,
    /// Error message shown under the form
    pub error: Option<String>,
}
