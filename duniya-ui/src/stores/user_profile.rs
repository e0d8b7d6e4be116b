//! User profile state store

use duniya_common::LoadState;

use crate::display_types::{ArtistCard, EventCard, QueryDisplay};

/// State for the user profile view
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserProfileState {
    /// Booked events, reconciled against the full catalog
    pub upcoming_events: LoadState<Vec<EventCard>>,
    /// Saved artists, hydrated to full cards
    pub saved_artists: LoadState<Vec<ArtistCard>>,
    /// Queries sent to this artist via the contact form (artists only;
    /// loaded empty for plain users)
    pub queries: LoadState<Vec<QueryDisplay>>,
}
