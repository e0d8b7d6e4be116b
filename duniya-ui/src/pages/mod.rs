//! Page services
//!
//! One service per view: the service owns its store, an API client, the
//! session handle and a cancellation scope; a view layer reads the store
//! and calls the action methods. Loads triggered on mount run concurrently
//! with no ordering between them, and derived views are computed only once
//! every required input has resolved.

pub mod artist_directory;
pub mod artist_profile;
pub mod auth;
pub mod create_event;
pub mod events;
pub mod user_profile;

pub use artist_directory::ArtistDirectoryPage;
pub use artist_profile::ArtistProfilePage;
pub use auth::AuthPage;
pub use create_event::{CreateEventPage, EventForm};
pub use events::{BookOutcome, EventsPage};
pub use user_profile::UserProfilePage;

/// Navigation the host should perform after an action.
#[derive(Clone, Debug, PartialEq)]
pub enum Redirect {
    Home,
    Signup,
    Events,
    ArtistProfile(String),
}
