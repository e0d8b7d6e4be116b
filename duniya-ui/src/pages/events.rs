//! Events listing page service

use duniya_common::{LoadState, LocalIdentitySet};
use duniya_core::{
    ApiClient, RelationKind, RelationToggle, SessionHandle, ToggleOutcome, ViewScope,
};
use tracing::warn;

use crate::display_types::event_from_api;
use crate::stores::{seed_events, EventsState};

/// Outcome of a booking attempt, for the host to surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BookOutcome {
    Booked,
    AlreadyBooked,
    /// A booking for this event is still in flight.
    Pending,
    /// No signed-in user; the host should route to signup.
    AuthRequired,
    Failed,
}

/// Service behind the events listing view.
pub struct EventsPage {
    pub state: EventsState,
    client: ApiClient,
    session: SessionHandle,
    bookings: RelationToggle,
    scope: ViewScope,
}

impl EventsPage {
    pub fn new(client: ApiClient, session: SessionHandle) -> Self {
        Self {
            state: EventsState::default(),
            bookings: RelationToggle::new(RelationKind::EventBooking, client.clone()),
            client,
            session,
            scope: ViewScope::new(),
        }
    }

    /// Load the catalog and the user's booked-event IDs concurrently; the
    /// store is written only once both have resolved.
    pub async fn mount(&mut self) {
        let events = self.client.list_events();
        let booked = load_booked_ids(&self.client, &self.session);
        let Some((events, booked)) = self.scope.run(async { tokio::join!(events, booked) }).await
        else {
            return;
        };

        self.state.events = match events {
            Ok(fetched) => {
                let mut all = seed_events();
                all.extend(fetched.iter().map(event_from_api));
                LoadState::Loaded(all)
            }
            Err(error) => {
                warn!("fetching events failed: {error}");
                LoadState::Failed(error.to_string())
            }
        };
        self.state.booked = booked;
    }

    pub fn unmount(&self) {
        self.scope.cancel();
    }

    /// Book a ticket. Booking is one-way: an already-booked event is
    /// refused before any request fires.
    pub async fn book(&mut self, event_id: &str) -> BookOutcome {
        if self.state.booked.contains(event_id) {
            return BookOutcome::AlreadyBooked;
        }
        match self.bookings.toggle(&mut self.state.booked, event_id).await {
            ToggleOutcome::Added | ToggleOutcome::Removed => BookOutcome::Booked,
            ToggleOutcome::AuthRequired => BookOutcome::AuthRequired,
            ToggleOutcome::Pending => BookOutcome::Pending,
            ToggleOutcome::Failed(_) => BookOutcome::Failed,
        }
    }
}

/// Booked IDs require a signed-in user; signed-out views show every event
/// as bookable.
async fn load_booked_ids(client: &ApiClient, session: &SessionHandle) -> LocalIdentitySet {
    let Some(user_id) = session.user_id() else {
        return LocalIdentitySet::new();
    };
    match client.booked_event_ids(&user_id).await {
        Ok(ids) => ids.into_iter().collect(),
        Err(error) => {
            warn!("fetching booked events failed: {error}");
            LocalIdentitySet::new()
        }
    }
}
