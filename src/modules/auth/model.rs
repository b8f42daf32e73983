pub use schoolhub_models::auth::{LoginRequest, LoginResponse, MessageResponse, RegisterRequest};
pub use schoolhub_models::identity::{Identity, Role};
pub use schoolhub_models::session::AuthState;
