//! Events listing state store

use duniya_common::{LoadState, LocalIdentitySet};

use crate::display_types::EventCard;

/// State for the events listing view
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EventsState {
    /// Every event in the grid, showcase seeds first, then the fetched
    /// catalog in catalog order
    pub events: LoadState<Vec<EventCard>>,
    /// IDs of the events the current user holds tickets for
    pub booked: LocalIdentitySet,
}

impl EventsState {
    pub fn is_booked(&self, event_id: &str) -> bool {
        self.booked.contains(event_id)
    }
}

/// Showcase events rendered ahead of the fetched catalog.
pub fn seed_events() -> Vec<EventCard> {
    vec![EventCard {
        id: "static-4".into(),
        title: "Art Gallery Opening".into(),
        date: "2025-08-01".into(),
        time: "5:00 PM".into(),
        location: "Metropolitan Gallery".into(),
        city: "Chicago".into(),
        image: "https://images.unsplash.com/photo-1531243269054-5ebf6f34081e?auto=format&fit=crop&w=800"
            .into(),
        description: "Opening night featuring works from emerging contemporary artists.".into(),
        kind: "Exhibition".into(),
        genre: "Visual Arts".into(),
        capacity: 150,
        fees: "Free".into(),
    }]
}
