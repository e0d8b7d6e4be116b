//! Authentication page service

use duniya_core::api::{AuthResponse, SignupRequest};
use duniya_core::{ApiClient, ApiError, Role, SessionHandle};

use crate::stores::{AuthState, AuthStatus};

use super::Redirect;

/// Service behind the login and signup views.
pub struct AuthPage {
    pub state: AuthState,
    client: ApiClient,
    session: SessionHandle,
}

impl AuthPage {
    pub fn new(client: ApiClient, session: SessionHandle) -> Self {
        Self {
            state: AuthState::default(),
            client,
            session,
        }
    }

    pub async fn login(&mut self, username: &str, password: &str) -> Option<Redirect> {
        self.begin();
        let result = self.client.login(username, password).await;
        self.finish(result)
    }

    /// Exchange a Google Identity credential for a session.
    pub async fn login_with_google(&mut self, credential: &str) -> Option<Redirect> {
        self.begin();
        let result = self.client.login_with_google(credential).await;
        self.finish(result)
    }

    pub async fn signup(&mut self, username: &str, email: &str, password: &str) -> Option<Redirect> {
        self.begin();
        let request = SignupRequest::user(username, email, password);
        let result = self.client.signup(&request).await;
        self.finish(result)
    }

    /// Artist signup carries the full profile; the role is forced here.
    pub async fn signup_artist(&mut self, mut request: SignupRequest) -> Option<Redirect> {
        request.role = Role::Artist;
        self.begin();
        let result = self.client.signup(&request).await;
        self.finish(result)
    }

    /// Drop the session locally; the API has no logout endpoint.
    pub fn logout(&self) {
        self.session.sign_out();
    }

    fn begin(&mut self) {
        self.state.status = AuthStatus::Pending;
        self.state.error = None;
    }

    fn finish(&mut self, result: Result<AuthResponse, ApiError>) -> Option<Redirect> {
        match result {
            Ok(response) => {
                self.session.sign_in(response.into_session());
                self.state.status = AuthStatus::Succeeded;
                Some(Redirect::Home)
            }
            Err(error) => {
                self.state.status = AuthStatus::Failed;
                self.state.error = Some(error.to_string());
                None
            }
        }
    }
}
