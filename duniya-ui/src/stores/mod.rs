//! Store types for page state
//!
//! One plain state struct per view. A view layer reads these; the page
//! services in [`crate::pages`] are the only writers.

pub mod artist_directory;
pub mod artist_profile;
pub mod auth;
pub mod create_event;
pub mod events;
pub mod form;
pub mod user_profile;

pub use artist_directory::*;
pub use artist_profile::*;
pub use auth::*;
pub use create_event::*;
pub use events::*;
pub use form::*;
pub use user_profile::*;
