//! Artist directory state store

use duniya_common::{reconcile, LoadState, LocalIdentitySet};

use crate::display_types::ArtistCard;

/// State for the artist directory view
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ArtistDirectoryState {
    /// Every artist in the grid, showcase seeds first, then the fetched
    /// directory in catalog order
    pub artists: LoadState<Vec<ArtistCard>>,
    /// IDs of the artists the current user has saved
    pub saved: LocalIdentitySet,
}

impl ArtistDirectoryState {
    pub fn is_saved(&self, artist_id: &str) -> bool {
        self.saved.contains(artist_id)
    }

    /// Saved artists in catalog order. Empty until the directory loads.
    pub fn saved_artists(&self) -> Vec<&ArtistCard> {
        match self.artists.loaded() {
            Some(artists) => reconcile(artists, &self.saved),
            None => Vec::new(),
        }
    }
}

/// Showcase artists rendered ahead of the fetched directory.
pub fn seed_artists() -> Vec<ArtistCard> {
    vec![ArtistCard {
        id: "4".into(),
        username: "David Thompson".into(),
        tag: "Visual Artist".into(),
        bio: "Mixed-media artist whose work explores the intersection of nature and technology."
            .into(),
        avatar: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?auto=format&fit=crop&w=500"
            .into(),
        instagram: Some("#".into()),
        twitter: Some("#".into()),
        youtube: None,
        facebook: None,
    }]
}
