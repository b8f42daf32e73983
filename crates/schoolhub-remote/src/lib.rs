//! # SchoolHub Remote
//!
//! Client for the hosted platform that stores SchoolHub's data and accounts.
//!
//! - [`RemoteClient`]: shared HTTP client, optionally acting as a signed-in user
//! - [`query::Query`]: select / insert / update / delete against a table
//! - [`auth::AuthApi`]: password sign-in, sign-up, sign-out, current user
//!
//! Any non-success response becomes [`RemoteError::Api`] carrying the
//! upstream message unmodified. Missing configuration is reported by the
//! call that needs it.
//!
//! # Example
//!
//! ```ignore
//! use schoolhub_config::RemoteConfig;
//! use schoolhub_remote::RemoteClient;
//!
//! let remote = RemoteClient::new(RemoteConfig::from_env());
//! let exams: Vec<serde_json::Value> = remote
//!     .from("exams")
//!     .select("*")
//!     .eq("class", "10A")
//!     .order("exam_date", true)
//!     .fetch()
//!     .await?;
//! ```

pub mod auth;
pub mod client;
pub mod error;
pub mod query;

pub use auth::{AuthApi, AuthSession, AuthUser};
pub use client::RemoteClient;
pub use error::RemoteError;
pub use query::Query;
