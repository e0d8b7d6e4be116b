use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Role attached to an account by the backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[default]
    User,
    Artist,
}

/// The signed-in account as returned by the auth endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub avatar: Option<String>,
}

/// A bearer session: the signed-in user, the token attached to outgoing
/// requests, and the token's expiry.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthSession {
    pub user: AuthUser,
    pub token: String,
    /// None means the server did not communicate an expiry.
    pub expires_at: Option<DateTime<Utc>>,
}

impl AuthSession {
    pub fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|at| at <= Utc::now())
    }
}

/// Shared handle to the current session.
///
/// Passed by value to every component that needs auth; reads and updates go
/// through this handle, there is no global. Cloning is cheap.
#[derive(Clone, Debug, Default)]
pub struct SessionHandle {
    inner: Arc<RwLock<Option<AuthSession>>>,
}

impl SessionHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a session after a successful login or signup.
    pub fn sign_in(&self, session: AuthSession) {
        info!(user = %session.user.username, "signed in");
        *self.inner.write().expect("session lock poisoned") = Some(session);
    }

    /// Drop the session. The token is never invalidated server-side; the
    /// API has no logout endpoint.
    pub fn sign_out(&self) {
        let previous = self
            .inner
            .write()
            .expect("session lock poisoned")
            .take();
        if previous.is_some() {
            info!("signed out");
        }
    }

    /// The current session, or None when signed out or expired.
    pub fn current(&self) -> Option<AuthSession> {
        self.inner
            .read()
            .expect("session lock poisoned")
            .clone()
            .filter(|session| !session.is_expired())
    }

    pub fn is_authenticated(&self) -> bool {
        self.current().is_some()
    }

    pub fn user_id(&self) -> Option<String> {
        self.current().map(|session| session.user.id)
    }

    pub fn bearer_token(&self) -> Option<String> {
        self.current().map(|session| session.token)
    }
}
