//! Client-side session handling.
//!
//! - [`SessionStore`]: the single owner of a viewer's [`AuthState`](schoolhub_models::AuthState)
//! - [`SchoolClient`]: drives the store and the navigation gate through
//!   session restore, login and logout

pub mod client;
pub mod store;

pub use client::SchoolClient;
pub use store::SessionStore;
