//! Shared support for page-service tests: a canned marketplace API served
//! on an ephemeral local port.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::Router;
use duniya_core::session::{AuthSession, AuthUser, Role};
use duniya_core::{ApiClient, Config, SessionHandle};

pub fn tracing_init() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_target(false)
        .try_init();
}

/// Serve a router on an ephemeral port, returning its address.
pub async fn serve(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.ok();
    });
    addr
}

/// A client and its session handle, pointed at a mock API.
pub fn client_for(addr: SocketAddr) -> (ApiClient, SessionHandle) {
    let session = SessionHandle::new();
    let config = Config::with_api_url(format!("http://{addr}"));
    (ApiClient::new(&config, session.clone()), session)
}

/// Sign the handle in as a test account with a non-expiring token.
pub fn sign_in(session: &SessionHandle, user_id: &str, role: Role) {
    session.sign_in(AuthSession {
        user: AuthUser {
            id: user_id.into(),
            username: "tester".into(),
            email: "tester@example.com".into(),
            role,
            avatar: None,
        },
        token: "test-token".into(),
        expires_at: None,
    });
}

/// Request counter for proving which routes fired (and which did not).
#[derive(Default)]
pub struct Hits(AtomicUsize);

impl Hits {
    pub fn bump(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }

    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}
