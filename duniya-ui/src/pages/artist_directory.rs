//! Artist directory page service

use duniya_common::{LoadState, LocalIdentitySet};
use duniya_core::api::{average_rating, Review};
use duniya_core::{
    ApiClient, RelationKind, RelationToggle, SessionHandle, ToggleOutcome, ViewScope,
};
use tracing::warn;

use crate::display_types::artist_card_from_api;
use crate::stores::{seed_artists, ArtistDirectoryState};

use super::Redirect;

/// Service behind the artist directory view.
pub struct ArtistDirectoryPage {
    pub state: ArtistDirectoryState,
    client: ApiClient,
    session: SessionHandle,
    saves: RelationToggle,
    scope: ViewScope,
}

impl ArtistDirectoryPage {
    pub fn new(client: ApiClient, session: SessionHandle) -> Self {
        Self {
            state: ArtistDirectoryState::default(),
            saves: RelationToggle::new(RelationKind::SavedArtist, client.clone()),
            client,
            session,
            scope: ViewScope::new(),
        }
    }

    /// Load the directory and the user's saved-artist IDs concurrently.
    /// Neither load orders before the other, and the store is written only
    /// once both have resolved.
    pub async fn mount(&mut self) {
        let artists = self.client.list_artists();
        let saved = load_saved_ids(&self.client, &self.session);
        let Some((artists, saved)) = self.scope.run(async { tokio::join!(artists, saved) }).await
        else {
            return;
        };

        self.state.artists = match artists {
            Ok(fetched) => {
                let mut all = seed_artists();
                all.extend(fetched.iter().map(artist_card_from_api));
                LoadState::Loaded(all)
            }
            Err(error) => {
                warn!("fetching artists failed: {error}");
                LoadState::Failed(error.to_string())
            }
        };
        self.state.saved = saved;
    }

    /// Release the view's scope; in-flight loads stop without touching the
    /// store.
    pub fn unmount(&self) {
        self.scope.cancel();
    }

    /// Save or unsave an artist, updating the heart as soon as the server
    /// acknowledges.
    pub async fn toggle_save(&mut self, artist_id: &str) -> Option<Redirect> {
        match self.saves.toggle(&mut self.state.saved, artist_id).await {
            ToggleOutcome::AuthRequired => Some(Redirect::Signup),
            _ => None,
        }
    }

    /// Profile navigation is gated on authentication.
    pub fn open_artist(&self, artist_id: &str) -> Redirect {
        if self.session.is_authenticated() {
            Redirect::ArtistProfile(artist_id.to_string())
        } else {
            Redirect::Signup
        }
    }

    /// Average rating for one card's badge. The badge fetches its own
    /// reviews; unavailable reads as unrated.
    pub async fn load_rating(&self, artist_id: &str) -> Option<f32> {
        let reviews: Vec<Review> = self
            .scope
            .run(
                self.client
                    .fetch_collection_or_empty("/api/review", &[("artistId", artist_id)]),
            )
            .await?;
        average_rating(&reviews)
    }
}

/// The saved-artist collection requires a signed-in user; signed-out views
/// render every heart empty.
async fn load_saved_ids(client: &ApiClient, session: &SessionHandle) -> LocalIdentitySet {
    let Some(user_id) = session.user_id() else {
        return LocalIdentitySet::new();
    };
    match client.saved_artists(&user_id).await {
        Ok(records) => records.into_iter().map(|record| record.artist_id).collect(),
        Err(error) => {
            warn!("fetching saved artists failed: {error}");
            LocalIdentitySet::new()
        }
    }
}
