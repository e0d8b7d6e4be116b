//! Optimistic create/delete toggling of user↔entity relations.

use std::collections::HashSet;
use std::sync::Mutex;

use duniya_common::LocalIdentitySet;
use reqwest::StatusCode;
use tracing::warn;

use crate::api::{ApiClient, ApiError};

/// Which user↔entity relation a toggle drives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RelationKind {
    /// Hearted artists (`/api/savedartist/*`).
    SavedArtist,
    /// Event ticket bookings (`/api/bookticket/*`). The API has no un-book
    /// endpoint, so removal reports [`ApiError::Unsupported`].
    EventBooking,
}

/// Outcome of a toggle attempt.
#[derive(Debug)]
pub enum ToggleOutcome {
    /// The relation was created and recorded locally.
    Added,
    /// The relation was deleted and removed locally.
    Removed,
    /// No authenticated user; nothing was sent and nothing was logged. The
    /// caller should route to the signup flow.
    AuthRequired,
    /// A toggle for this entity is still in flight; nothing was sent.
    Pending,
    /// The request failed; local state is unchanged.
    Failed(ApiError),
}

/// Optimistic toggle for one relation resource.
///
/// Local membership is updated as soon as the server acknowledges, without
/// re-fetching the relation collection. There is no automatic rollback; a
/// failure leaves the set untouched and the next full fetch re-synchronizes.
/// Re-entrant toggles on the same entity are refused while a request is
/// outstanding.
#[derive(Debug)]
pub struct RelationToggle {
    kind: RelationKind,
    client: ApiClient,
    in_flight: Mutex<HashSet<String>>,
}

impl RelationToggle {
    /// The live API answers 201 to a successful delete (non-standard, but
    /// load-bearing): any other status, 2xx included, is a failure.
    const DELETE_SUCCESS: StatusCode = StatusCode::CREATED;

    pub fn new(kind: RelationKind, client: ApiClient) -> Self {
        Self {
            kind,
            client,
            in_flight: Mutex::new(HashSet::new()),
        }
    }

    /// Flip the relation for `entity_id`: absent → create, present → delete.
    pub async fn toggle(&self, set: &mut LocalIdentitySet, entity_id: &str) -> ToggleOutcome {
        let Some(user_id) = self.client.session().user_id() else {
            return ToggleOutcome::AuthRequired;
        };

        if !self.begin(entity_id) {
            return ToggleOutcome::Pending;
        }
        let outcome = if set.contains(entity_id) {
            self.remove(&user_id, set, entity_id).await
        } else {
            self.add(&user_id, set, entity_id).await
        };
        self.finish(entity_id);
        outcome
    }

    fn begin(&self, entity_id: &str) -> bool {
        self.in_flight
            .lock()
            .expect("in-flight lock poisoned")
            .insert(entity_id.to_string())
    }

    fn finish(&self, entity_id: &str) {
        self.in_flight
            .lock()
            .expect("in-flight lock poisoned")
            .remove(entity_id);
    }

    async fn add(
        &self,
        user_id: &str,
        set: &mut LocalIdentitySet,
        entity_id: &str,
    ) -> ToggleOutcome {
        let result = match self.kind {
            RelationKind::SavedArtist => self.client.create_saved_artist(user_id, entity_id).await,
            RelationKind::EventBooking => self.client.book_ticket(user_id, entity_id).await,
        };
        match result {
            // Create succeeds on any 2xx.
            Ok(status) if status.is_success() => {
                set.insert(entity_id);
                ToggleOutcome::Added
            }
            Ok(status) => {
                warn!(%status, entity_id, "creating relation failed");
                ToggleOutcome::Failed(ApiError::unexpected_status(status))
            }
            Err(error) => {
                warn!(entity_id, "creating relation failed: {error}");
                ToggleOutcome::Failed(error)
            }
        }
    }

    async fn remove(
        &self,
        user_id: &str,
        set: &mut LocalIdentitySet,
        entity_id: &str,
    ) -> ToggleOutcome {
        let result = match self.kind {
            RelationKind::SavedArtist => self.client.delete_saved_artist(user_id, entity_id).await,
            RelationKind::EventBooking => Err(ApiError::Unsupported),
        };
        match result {
            Ok(status) if status == Self::DELETE_SUCCESS => {
                set.remove(entity_id);
                ToggleOutcome::Removed
            }
            Ok(status) => {
                warn!(%status, entity_id, "deleting relation failed");
                ToggleOutcome::Failed(ApiError::unexpected_status(status))
            }
            Err(error) => {
                warn!(entity_id, "deleting relation failed: {error}");
                ToggleOutcome::Failed(error)
            }
        }
    }
}
