//! Artist profile state store

use duniya_common::LoadState;

use super::form::SubmitState;
use crate::display_types::ArtistProfile;

/// State for the artist profile view
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ArtistProfileState {
    /// The artist being viewed
    pub profile: LoadState<ArtistProfile>,
    /// Mean review rating; None while loading or when there are no reviews
    pub average_rating: Option<f32>,
    /// Contact form submission state
    pub contact: SubmitState,
    /// Review form submission state
    pub review: SubmitState,
}
