//! Push relay function: `POST /functions/v1/send-push-notification`.

pub mod controller;
pub mod router;
pub mod service;

pub use router::init_functions_router;
pub use service::{FanOutService, RelayError};
