//! duniya-ui - Page state and services for duniya
//!
//! Framework-agnostic stores (one per view) and the page services that
//! populate them from the marketplace API. A view layer binds to a
//! service's store and calls its action methods; nothing here renders.

pub mod display_types;
pub mod pages;
pub mod stores;

pub use display_types::*;
