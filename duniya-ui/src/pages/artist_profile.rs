//! Artist profile page service

use duniya_common::LoadState;
use duniya_core::api::{average_rating, NewContact, NewReview, Review};
use duniya_core::{ApiClient, SessionHandle, ViewScope};
use tracing::warn;

use crate::display_types::artist_profile_from_api;
use crate::stores::ArtistProfileState;

/// Service behind the artist profile view.
pub struct ArtistProfilePage {
    pub state: ArtistProfileState,
    client: ApiClient,
    session: SessionHandle,
    artist_id: Option<String>,
    scope: ViewScope,
}

impl ArtistProfilePage {
    pub fn new(client: ApiClient, session: SessionHandle) -> Self {
        Self {
            state: ArtistProfileState::default(),
            client,
            session,
            artist_id: None,
            scope: ViewScope::new(),
        }
    }

    /// Load the profile and its reviews concurrently.
    pub async fn mount(&mut self, artist_id: &str) {
        self.artist_id = Some(artist_id.to_string());

        let profile = self.client.get_artist(artist_id);
        let review_params = [("artistId", artist_id)];
        let reviews = self
            .client
            .fetch_collection_or_empty::<Review>("/api/review", &review_params);
        let Some((profile, reviews)) = self.scope.run(async { tokio::join!(profile, reviews) }).await
        else {
            return;
        };

        self.state.profile = match profile {
            Ok(artist) => LoadState::Loaded(artist_profile_from_api(&artist)),
            Err(error) => {
                warn!(artist_id, "fetching artist failed: {error}");
                LoadState::Failed(error.to_string())
            }
        };
        self.state.average_rating = average_rating(&reviews);
    }

    pub fn unmount(&self) {
        self.scope.cancel();
    }

    /// Send a contact-form query to the artist. Success and failure both
    /// surface inline on the form.
    pub async fn send_contact(
        &mut self,
        sender_email: &str,
        subject: Option<String>,
        message: &str,
    ) {
        let Some(artist_id) = self.artist_id.clone() else {
            return;
        };
        self.state.contact.start();

        let contact = NewContact {
            artist_id,
            sender_email: sender_email.to_string(),
            subject,
            message: message.to_string(),
        };
        match self.client.submit_contact(&contact).await {
            Ok(()) => self.state.contact.succeed("Your message has been sent!"),
            Err(error) => self.state.contact.fail(error.to_string()),
        }
    }

    /// Leave a review. On success the average refreshes from the server.
    pub async fn send_review(&mut self, rating: f32, comment: Option<String>) {
        let Some(artist_id) = self.artist_id.clone() else {
            return;
        };
        let Some(user_id) = self.session.user_id() else {
            self.state.review.fail("Sign in to leave a review");
            return;
        };
        self.state.review.start();

        let review = NewReview {
            artist_id: artist_id.clone(),
            user_id,
            rating,
            comment,
        };
        match self.client.submit_review(&review).await {
            Ok(()) => {
                self.state.review.succeed("Review submitted!");
                let reviews: Vec<Review> = self
                    .client
                    .fetch_collection_or_empty("/api/review", &[("artistId", &artist_id)])
                    .await;
                self.state.average_rating = average_rating(&reviews);
            }
            Err(error) => self.state.review.fail(error.to_string()),
        }
    }
}
