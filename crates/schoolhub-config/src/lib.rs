//! # SchoolHub Config
//!
//! Configuration structures loaded from environment variables:
//!
//! - [`remote`]: hosted database / auth API location and public key
//! - [`push`]: push gateway endpoint and access token
//! - [`jwt`]: verification of access tokens issued by the remote auth service
//! - [`cors`]: CORS allowed origins
//! - [`server`]: listener ports
//!
//! Credentials the remote collaborators need are kept as `Option` and are not
//! checked here; the call that needs a value fails when it is missing.
//!
//! # Example
//!
//! ```ignore
//! use schoolhub_config::{CorsConfig, JwtConfig, PushConfig, RemoteConfig};
//!
//! let remote = RemoteConfig::from_env();
//! let push = PushConfig::from_env();
//! let jwt = JwtConfig::from_env();
//! let cors = CorsConfig::from_env();
//! ```

pub mod cors;
pub mod jwt;
pub mod push;
pub mod remote;
pub mod server;

pub use cors::CorsConfig;
pub use jwt::JwtConfig;
pub use push::PushConfig;
pub use remote::RemoteConfig;
pub use server::ServerConfig;

/// Reads an environment variable, treating blank values as unset.
pub(crate) fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
