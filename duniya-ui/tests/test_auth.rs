//! Page-service tests for authentication: status transitions, session
//! handoff, and signup role handling.

mod support;

use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};

use duniya_core::api::SignupRequest;
use duniya_ui::pages::{AuthPage, Redirect};
use duniya_ui::stores::AuthStatus;
use support::{client_for, serve, tracing_init};

fn auth_response(username: &str) -> Value {
    json!({
        "user": {"_id": "u1", "username": username, "email": "t@example.com", "role": "User"},
        "token": "tok-123",
        "expiresAt": "2030-01-01T00:00:00Z",
    })
}

#[tokio::test]
async fn login_succeeds_and_stores_the_session() {
    tracing_init();
    let app = Router::new().route(
        "/api/auth/login",
        post(|| async { Json(auth_response("mira")) }),
    );
    let addr = serve(app).await;
    let (client, session) = client_for(addr);

    let mut page = AuthPage::new(client, session.clone());
    assert_eq!(page.state.status, AuthStatus::Idle);

    let redirect = page.login("mira", "hunter2").await;
    assert_eq!(redirect, Some(Redirect::Home));
    assert_eq!(page.state.status, AuthStatus::Succeeded);
    assert_eq!(page.state.error, None);
    assert!(session.is_authenticated());
}

#[tokio::test]
async fn failed_login_surfaces_the_message() {
    tracing_init();
    let app = Router::new().route(
        "/api/auth/login",
        post(|| async {
            (
                StatusCode::UNAUTHORIZED,
                Json(json!({"error": {"message": "bad credentials"}})),
            )
        }),
    );
    let addr = serve(app).await;
    let (client, session) = client_for(addr);

    let mut page = AuthPage::new(client, session.clone());
    let redirect = page.login("mira", "wrong").await;

    assert_eq!(redirect, None);
    assert_eq!(page.state.status, AuthStatus::Failed);
    assert!(page.state.error.as_deref().unwrap().contains("bad credentials"));
    assert!(!session.is_authenticated());
}

#[tokio::test]
async fn signup_sends_the_user_role() {
    tracing_init();
    let app = Router::new().route(
        "/api/auth/signup",
        post(|Json(body): Json<Value>| async move {
            assert_eq!(body["role"], "User");
            assert_eq!(body["username"], "mira");
            Json(auth_response("mira"))
        }),
    );
    let addr = serve(app).await;
    let (client, session) = client_for(addr);

    let mut page = AuthPage::new(client, session.clone());
    let redirect = page.signup("mira", "m@example.com", "hunter2").await;

    assert_eq!(redirect, Some(Redirect::Home));
    assert!(session.is_authenticated());
}

#[tokio::test]
async fn artist_signup_forces_the_artist_role() {
    tracing_init();
    let app = Router::new().route(
        "/api/auth/signup",
        post(|Json(body): Json<Value>| async move {
            assert_eq!(body["role"], "Artist");
            assert_eq!(body["tag"], "Sitarist");
            Json(auth_response("mira"))
        }),
    );
    let addr = serve(app).await;
    let (client, session) = client_for(addr);

    let mut request = SignupRequest::user("mira", "m@example.com", "hunter2");
    request.tag = Some("Sitarist".into());

    let mut page = AuthPage::new(client, session);
    let redirect = page.signup_artist(request).await;
    assert_eq!(redirect, Some(Redirect::Home));
}

#[tokio::test]
async fn google_login_exchanges_the_credential() {
    tracing_init();
    let app = Router::new().route(
        "/api/auth/google",
        post(|Json(body): Json<Value>| async move {
            assert_eq!(body["credential"], "google-jwt");
            Json(auth_response("mira"))
        }),
    );
    let addr = serve(app).await;
    let (client, session) = client_for(addr);

    let mut page = AuthPage::new(client, session.clone());
    assert_eq!(
        page.login_with_google("google-jwt").await,
        Some(Redirect::Home)
    );
    assert!(session.is_authenticated());
}

#[tokio::test]
async fn logout_clears_the_session() {
    tracing_init();
    let app = Router::new().route(
        "/api/auth/login",
        post(|| async { Json(auth_response("mira")) }),
    );
    let addr = serve(app).await;
    let (client, session) = client_for(addr);

    let mut page = AuthPage::new(client, session.clone());
    page.login("mira", "hunter2").await;
    assert!(session.is_authenticated());

    page.logout();
    assert!(!session.is_authenticated());
}
