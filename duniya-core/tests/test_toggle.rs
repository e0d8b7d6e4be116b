//! Integration tests for the optimistic relation toggle: the auth
//! precondition, the any-2xx create contract, the exact-201 delete
//! contract, and the in-flight guard.

mod support;

use std::sync::Arc;
use std::time::Duration;

use axum::http::StatusCode;
use axum::routing::post;
use axum::Router;

use duniya_common::LocalIdentitySet;
use duniya_core::{ApiError, RelationKind, RelationToggle, Role, ToggleOutcome};
use support::{client_for, serve, sign_in, tracing_init, Hits};

fn counted_route(status: StatusCode, hits: Arc<Hits>) -> axum::routing::MethodRouter {
    post(move || {
        let hits = hits.clone();
        async move {
            hits.bump();
            status
        }
    })
}

#[tokio::test]
async fn save_toggle_adds_on_2xx() {
    tracing_init();
    let hits = Arc::new(Hits::default());
    let app = Router::new().route(
        "/api/savedartist/create",
        counted_route(StatusCode::CREATED, hits.clone()),
    );
    let addr = serve(app).await;
    let (client, session) = client_for(addr);
    sign_in(&session, "u1", Role::User);

    let toggle = RelationToggle::new(RelationKind::SavedArtist, client);
    let mut saved = LocalIdentitySet::new();

    let outcome = toggle.toggle(&mut saved, "a1").await;
    assert!(matches!(outcome, ToggleOutcome::Added));
    assert!(saved.contains("a1"));
    assert_eq!(hits.count(), 1);
}

#[tokio::test]
async fn unsave_requires_exactly_201() {
    tracing_init();

    // A 200 delete is a failure even though it is a 2xx.
    let hits = Arc::new(Hits::default());
    let app = Router::new().route(
        "/api/savedartist/delete",
        counted_route(StatusCode::OK, hits.clone()),
    );
    let addr = serve(app).await;
    let (client, session) = client_for(addr);
    sign_in(&session, "u1", Role::User);

    let toggle = RelationToggle::new(RelationKind::SavedArtist, client);
    let mut saved: LocalIdentitySet = ["a1"].into_iter().collect();

    let outcome = toggle.toggle(&mut saved, "a1").await;
    assert!(matches!(outcome, ToggleOutcome::Failed(_)));
    assert!(saved.contains("a1"), "failed delete must not drop membership");

    // The observed 201 removes membership.
    let app = Router::new().route(
        "/api/savedartist/delete",
        counted_route(StatusCode::CREATED, Arc::new(Hits::default())),
    );
    let addr = serve(app).await;
    let (client, session) = client_for(addr);
    sign_in(&session, "u1", Role::User);

    let toggle = RelationToggle::new(RelationKind::SavedArtist, client);
    let outcome = toggle.toggle(&mut saved, "a1").await;
    assert!(matches!(outcome, ToggleOutcome::Removed));
    assert!(!saved.contains("a1"));
}

#[tokio::test]
async fn unauthenticated_toggle_fires_nothing() {
    tracing_init();
    let hits = Arc::new(Hits::default());
    let app = Router::new().route(
        "/api/savedartist/create",
        counted_route(StatusCode::CREATED, hits.clone()),
    );
    let addr = serve(app).await;
    let (client, _session) = client_for(addr);

    let toggle = RelationToggle::new(RelationKind::SavedArtist, client);
    let mut saved = LocalIdentitySet::new();

    let outcome = toggle.toggle(&mut saved, "a1").await;
    assert!(matches!(outcome, ToggleOutcome::AuthRequired));
    assert!(saved.is_empty());
    assert_eq!(hits.count(), 0, "precondition failure must not send a request");
}

#[tokio::test]
async fn reentrant_toggle_is_refused_while_in_flight() {
    tracing_init();
    let hits = Arc::new(Hits::default());
    let slow_hits = hits.clone();
    let app = Router::new().route(
        "/api/savedartist/create",
        post(move || {
            let hits = slow_hits.clone();
            async move {
                hits.bump();
                tokio::time::sleep(Duration::from_millis(300)).await;
                StatusCode::CREATED
            }
        }),
    );
    let addr = serve(app).await;
    let (client, session) = client_for(addr);
    sign_in(&session, "u1", Role::User);

    let toggle = Arc::new(RelationToggle::new(RelationKind::SavedArtist, client));

    let first = {
        let toggle = toggle.clone();
        tokio::spawn(async move {
            let mut saved = LocalIdentitySet::new();
            let outcome = toggle.toggle(&mut saved, "a1").await;
            (outcome, saved)
        })
    };

    // Give the first request time to reach the server.
    tokio::time::sleep(Duration::from_millis(100)).await;

    let mut saved = LocalIdentitySet::new();
    let outcome = toggle.toggle(&mut saved, "a1").await;
    assert!(matches!(outcome, ToggleOutcome::Pending));
    assert!(saved.is_empty());

    let (first_outcome, first_saved) = first.await.unwrap();
    assert!(matches!(first_outcome, ToggleOutcome::Added));
    assert!(first_saved.contains("a1"));
    assert_eq!(hits.count(), 1, "the re-entrant toggle must not fire");
}

#[tokio::test]
async fn booking_cannot_be_deleted() {
    tracing_init();
    let hits = Arc::new(Hits::default());
    let app = Router::new().route("/api/bookticket/:id", counted_route(StatusCode::OK, hits.clone()));
    let addr = serve(app).await;
    let (client, session) = client_for(addr);
    sign_in(&session, "u1", Role::User);

    let toggle = RelationToggle::new(RelationKind::EventBooking, client);
    let mut booked: LocalIdentitySet = ["e1"].into_iter().collect();

    let outcome = toggle.toggle(&mut booked, "e1").await;
    assert!(matches!(outcome, ToggleOutcome::Failed(ApiError::Unsupported)));
    assert!(booked.contains("e1"));
    assert_eq!(hits.count(), 0);
}

#[tokio::test]
async fn booking_create_goes_through_the_ticket_route() {
    tracing_init();
    let hits = Arc::new(Hits::default());
    let app = Router::new().route(
        "/api/bookticket/:id",
        counted_route(StatusCode::CREATED, hits.clone()),
    );
    let addr = serve(app).await;
    let (client, session) = client_for(addr);
    sign_in(&session, "u1", Role::User);

    let toggle = RelationToggle::new(RelationKind::EventBooking, client);
    let mut booked = LocalIdentitySet::new();

    let outcome = toggle.toggle(&mut booked, "e1").await;
    assert!(matches!(outcome, ToggleOutcome::Added));
    assert!(booked.contains("e1"));
    assert_eq!(hits.count(), 1);
}
