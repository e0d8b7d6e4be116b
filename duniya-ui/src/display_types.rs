//! Display types for page stores
//!
//! Lightweight versions of the API wire types, containing only the fields
//! the views render, with the fallbacks the views apply (placeholder
//! avatars, "No Subject", empty-string socials hidden).

use duniya_common::HasId;
use duniya_core::api::{Artist, ContactQuery, Event};

/// Fallback shown when an artist has no avatar.
pub const AVATAR_PLACEHOLDER: &str = "https://via.placeholder.com/500";

/// Artist card display info (directory grid and saved-artist lists).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ArtistCard {
    pub id: String,
    pub username: String,
    pub tag: String,
    pub bio: String,
    pub avatar: String,
    pub instagram: Option<String>,
    pub twitter: Option<String>,
    pub youtube: Option<String>,
    pub facebook: Option<String>,
}

impl HasId for ArtistCard {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Full artist profile display info.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ArtistProfile {
    pub card: ArtistCard,
    pub email: String,
    pub phone_number: String,
    /// "City, State, Country - Pincode" as the profile page prints it.
    pub location: String,
    pub video_links: Vec<String>,
}

/// Event card display info.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EventCard {
    pub id: String,
    pub title: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub city: String,
    pub image: String,
    pub description: String,
    pub kind: String,
    pub genre: String,
    pub capacity: u32,
    pub fees: String,
}

impl HasId for EventCard {
    fn id(&self) -> &str {
        &self.id
    }
}

/// A contact-form query as shown on the artist's own profile page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueryDisplay {
    pub subject: String,
    pub message: String,
    pub sender_email: String,
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.clone().filter(|s| !s.is_empty())
}

pub fn artist_card_from_api(artist: &Artist) -> ArtistCard {
    ArtistCard {
        id: artist.id.clone(),
        username: artist.username.clone(),
        tag: artist.tag.clone().unwrap_or_default(),
        bio: artist.bio.clone().unwrap_or_default(),
        avatar: artist
            .avatars
            .first()
            .cloned()
            .unwrap_or_else(|| AVATAR_PLACEHOLDER.to_string()),
        instagram: non_empty(&artist.instagram),
        twitter: non_empty(&artist.twitter),
        youtube: non_empty(&artist.youtube),
        facebook: non_empty(&artist.facebook),
    }
}

pub fn artist_profile_from_api(artist: &Artist) -> ArtistProfile {
    let location = format!(
        "{}, {}, {} - {}",
        artist.city.clone().unwrap_or_default(),
        artist.state.clone().unwrap_or_default(),
        artist.country.clone().unwrap_or_default(),
        artist.pincode.clone().unwrap_or_default(),
    );
    let video_links = [
        &artist.video_link1,
        &artist.video_link2,
        &artist.video_link3,
    ]
    .into_iter()
    .filter_map(non_empty)
    .collect();

    ArtistProfile {
        card: artist_card_from_api(artist),
        email: artist.email.clone().unwrap_or_default(),
        phone_number: artist.phone_number.clone().unwrap_or_default(),
        location,
        video_links,
    }
}

pub fn event_from_api(event: &Event) -> EventCard {
    EventCard {
        id: event.id.clone(),
        title: event.title.clone(),
        date: event.date.clone().unwrap_or_default(),
        time: event.time.clone().unwrap_or_default(),
        location: event.location.clone().unwrap_or_default(),
        city: event.city.clone().unwrap_or_default(),
        image: event.image.clone().unwrap_or_default(),
        description: event.description.clone().unwrap_or_default(),
        kind: event.kind.clone().unwrap_or_default(),
        genre: event.genre.clone().unwrap_or_default(),
        capacity: event.capacity.unwrap_or_default(),
        fees: event.fees.clone().unwrap_or_default(),
    }
}

pub fn query_from_api(query: &ContactQuery) -> QueryDisplay {
    QueryDisplay {
        subject: non_empty(&query.subject).unwrap_or_else(|| "No Subject".to_string()),
        message: query.message.clone(),
        sender_email: non_empty(&query.sender_email).unwrap_or_else(|| "Anonymous".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_artist() -> Artist {
        serde_json::from_value(serde_json::json!({"_id": "a1", "username": "Mira"}))
            .expect("minimal artist")
    }

    #[test]
    fn missing_avatar_falls_back_to_placeholder() {
        let card = artist_card_from_api(&minimal_artist());
        assert_eq!(card.avatar, AVATAR_PLACEHOLDER);
    }

    #[test]
    fn empty_social_links_are_hidden() {
        let mut artist = minimal_artist();
        artist.instagram = Some(String::new());
        artist.twitter = Some("#".into());
        let card = artist_card_from_api(&artist);
        assert_eq!(card.instagram, None);
        assert_eq!(card.twitter.as_deref(), Some("#"));
    }

    #[test]
    fn query_fallbacks_match_the_profile_page() {
        let query: ContactQuery = serde_json::from_value(serde_json::json!({
            "message": "Are you free in May?",
        }))
        .expect("query");
        let display = query_from_api(&query);
        assert_eq!(display.subject, "No Subject");
        assert_eq!(display.sender_email, "Anonymous");
    }
}
