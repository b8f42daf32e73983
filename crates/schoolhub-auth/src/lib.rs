//! # SchoolHub Auth
//!
//! Verification of the access tokens the hosted auth service hands to signed-in
//! users. The server never mints tokens itself; it only checks the signature,
//! expiry and audience, then reads the subject and the admin-assigned role.
//!
//! - [`claims`]: the claim set carried by an access token
//! - [`jwt`]: signature and audience verification
//!
//! # Example
//!
//! ```ignore
//! use schoolhub_auth::verify_token;
//! use schoolhub_config::JwtConfig;
//!
//! let claims = verify_token(bearer, &JwtConfig::from_env())?;
//! println!("{} signed in with role {:?}", claims.sub, claims.app_role());
//! ```

pub mod claims;
pub mod jwt;

pub use claims::{AppMetadata, Claims};
pub use jwt::verify_token;
