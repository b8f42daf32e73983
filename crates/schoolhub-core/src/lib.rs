//! # SchoolHub Core
//!
//! Foundational types shared by every SchoolHub crate:
//!
//! - [`errors`]: the HTTP-aware [`AppError`] returned by services and handlers
//! - [`serde`]: lenient deserializers for values coming from remote rows and query strings
//!
//! # Example
//!
//! ```ignore
//! use schoolhub_core::AppError;
//!
//! let error = AppError::not_found(anyhow::anyhow!("Lecture not found"));
//! assert_eq!(error.status, axum::http::StatusCode::NOT_FOUND);
//! ```

pub mod errors;
pub mod serde;

pub use errors::AppError;
