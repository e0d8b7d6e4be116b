//! duniya-core - API client and synchronization primitives for duniya
//!
//! Contains the marketplace API client, the collection fetcher, the
//! optimistic relation toggle, session handling and view-scope cancellation
//! used by the duniya-ui page services.

pub mod api;
pub mod config;
pub mod fetcher;
pub mod relation;
pub mod scope;
pub mod session;

pub use api::{ApiClient, ApiError};
pub use config::Config;
pub use relation::{RelationKind, RelationToggle, ToggleOutcome};
pub use scope::ViewScope;
pub use session::{AuthSession, AuthUser, Role, SessionHandle};
