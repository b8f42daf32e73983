//! Authentication DTOs.
//!
//! Credentials are checked by the platform's auth API; these types shape
//! what the server accepts and returns around it.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::identity::{Identity, Role};
use crate::navigation::Section;
use crate::value_types::{Email, PhoneNumber};

/// Login request with email and password.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(email)]
    #[schema(example = "teacher@school.test")]
    pub email: String,
    #[validate(length(min = 1))]
    #[schema(example = "password123")]
    pub password: String,
}

/// Successful login.
///
/// `destination` is the section the navigation gate sends the user to,
/// so clients can route without a second round trip.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_in: i64,
    pub user: Identity,
    pub destination: Section,
}

/// Admin-only account creation. Creates the auth user and its profile row.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    pub email: Email,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    pub role: Role,
    #[validate(length(min = 1, max = 50))]
    pub roll_number: Option<String>,
    #[validate(length(min = 1, max = 50))]
    pub class: Option<String>,
    pub phone: Option<PhoneNumber>,
    #[validate(length(min = 1, max = 100))]
    pub guardian_name: Option<String>,
    pub guardian_phone: Option<PhoneNumber>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
