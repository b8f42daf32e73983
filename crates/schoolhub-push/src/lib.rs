//! # SchoolHub Push
//!
//! Delivery of notifications to mobile devices through an external push
//! gateway.
//!
//! - [`PushGateway`]: the seam the relay depends on
//! - [`ExpoGateway`]: production gateway speaking the Expo push API
//! - [`parse_gateway_response`]: ticket extraction shared by gateways
//!
//! Duplicate tokens in a batch are sent as-is; nothing here deduplicates or
//! retries.

pub mod error;
pub mod expo;
pub mod gateway;

pub use error::PushError;
pub use expo::ExpoGateway;
pub use gateway::{PushGateway, parse_gateway_response};
