//! User profile page service

use duniya_common::{reconcile_owned, LoadState, LocalIdentitySet};
use duniya_core::session::AuthUser;
use duniya_core::{ApiClient, Role, SessionHandle, ViewScope};
use tracing::warn;

use crate::display_types::{
    artist_card_from_api, event_from_api, query_from_api, ArtistCard, EventCard, QueryDisplay,
};
use crate::stores::UserProfileState;

/// Service behind the user profile view.
pub struct UserProfilePage {
    pub state: UserProfileState,
    client: ApiClient,
    session: SessionHandle,
    scope: ViewScope,
}

impl UserProfilePage {
    pub fn new(client: ApiClient, session: SessionHandle) -> Self {
        Self {
            state: UserProfileState::default(),
            client,
            session,
            scope: ViewScope::new(),
        }
    }

    /// Load the three profile sections concurrently. Each section's arrival
    /// is independent of the others; a signed-out profile loads nothing
    /// (the host redirects before mounting it).
    pub async fn mount(&mut self) {
        let Some(session) = self.session.current() else {
            return;
        };
        let user = session.user;

        let upcoming = load_upcoming(&self.client, &user.id);
        let saved = load_saved(&self.client, &user.id);
        let queries = load_queries(&self.client, &user);
        let Some((upcoming, saved, queries)) = self
            .scope
            .run(async { tokio::join!(upcoming, saved, queries) })
            .await
        else {
            return;
        };

        self.state.upcoming_events = upcoming;
        self.state.saved_artists = saved;
        self.state.queries = queries;
    }

    pub fn unmount(&self) {
        self.scope.cancel();
    }
}

/// Booked events: the full catalog and the user's booked IDs load together,
/// and the catalog is filtered only once both are in.
async fn load_upcoming(client: &ApiClient, user_id: &str) -> LoadState<Vec<EventCard>> {
    let (events, booked) = tokio::join!(client.list_events(), client.booked_event_ids(user_id));

    let events = match events {
        Ok(events) => events,
        Err(error) => {
            warn!("fetching events failed: {error}");
            return LoadState::Failed(error.to_string());
        }
    };
    let booked: LocalIdentitySet = match booked {
        Ok(ids) => ids.into_iter().collect(),
        Err(error) => {
            warn!("fetching booked events failed: {error}");
            LocalIdentitySet::new()
        }
    };

    let cards: Vec<EventCard> = events.iter().map(event_from_api).collect();
    LoadState::Loaded(reconcile_owned(&cards, &booked))
}

/// Saved artists arrive as IDs and are hydrated to full profiles
/// concurrently; an artist that fails to load is dropped, not fatal.
async fn load_saved(client: &ApiClient, user_id: &str) -> LoadState<Vec<ArtistCard>> {
    let records = match client.saved_artists(user_id).await {
        Ok(records) => records,
        Err(error) => {
            warn!("fetching saved artists failed: {error}");
            return LoadState::Failed(error.to_string());
        }
    };

    let lookups = records
        .iter()
        .map(|record| client.get_artist(&record.artist_id));
    let cards = futures::future::join_all(lookups)
        .await
        .into_iter()
        .filter_map(|artist| match artist {
            Ok(artist) => Some(artist_card_from_api(&artist)),
            Err(error) => {
                warn!("hydrating saved artist failed: {error}");
                None
            }
        })
        .collect();
    LoadState::Loaded(cards)
}

/// Contact queries are an artist-only section; plain users load it empty
/// without a request.
async fn load_queries(client: &ApiClient, user: &AuthUser) -> LoadState<Vec<QueryDisplay>> {
    if user.role != Role::Artist {
        return LoadState::Loaded(Vec::new());
    }
    match client.artist_queries(&user.id).await {
        Ok(queries) => LoadState::Loaded(queries.iter().map(query_from_api).collect()),
        Err(error) => {
            warn!("fetching queries failed: {error}");
            LoadState::Failed(error.to_string())
        }
    }
}
