//! The signed-in user's profile and application role.

use chrono::{DateTime, Utc};
use schoolhub_core::serde::deserialize_lenient;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;

/// Application role. Every identity has at most one, assigned by an admin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Teacher,
    Admin,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Student, Role::Teacher, Role::Admin];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Teacher => "teacher",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRole(pub String);

impl fmt::Display for UnknownRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown role '{}'", self.0)
    }
}

impl std::error::Error for UnknownRole {}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "student" => Ok(Role::Student),
            "teacher" => Ok(Role::Teacher),
            "admin" => Ok(Role::Admin),
            _ => Err(UnknownRole(s.to_string())),
        }
    }
}

/// Profile row of the remote `users` table.
///
/// A missing or unrecognised `role` column deserializes to `None`; callers
/// must treat such an identity like an anonymous viewer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Identity {
    pub id: Uuid,
    pub email: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    #[schema(value_type = Option<Role>)]
    pub role: Option<Role>,
    #[serde(default)]
    pub roll_number: Option<String>,
    #[serde(default)]
    pub class: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub guardian_name: Option<String>,
    #[serde(default)]
    pub guardian_phone: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Identity {
    /// Minimal identity with no profile fields.
    pub fn new(id: Uuid, email: impl Into<String>, name: impl Into<String>, role: Option<Role>) -> Self {
        Self {
            id,
            email: email.into(),
            name: name.into(),
            role,
            roll_number: None,
            class: None,
            phone: None,
            guardian_name: None,
            guardian_phone: None,
            created_at: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parsing() {
        assert_eq!("Admin".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!("student".parse::<Role>().unwrap(), Role::Student);
        assert!("principal".parse::<Role>().is_err());
    }

    #[test]
    fn test_identity_from_profile_row() {
        let row = serde_json::json!({
            "id": "1b4e28ba-2fa1-11d2-883f-0016d3cca427",
            "email": "sam@school.test",
            "name": "Sam Okafor",
            "role": "student",
            "roll_number": "S-042",
            "class": "10A",
            "guardian_name": "Ngozi Okafor",
            "created_at": "2024-09-01T08:00:00Z"
        });

        let identity: Identity = serde_json::from_value(row).unwrap();
        assert_eq!(identity.role, Some(Role::Student));
        assert_eq!(identity.class.as_deref(), Some("10A"));
        assert!(identity.phone.is_none());
    }

    #[test]
    fn test_unknown_role_is_none() {
        let row = serde_json::json!({
            "id": "1b4e28ba-2fa1-11d2-883f-0016d3cca427",
            "email": "x@school.test",
            "role": "janitor"
        });

        let identity: Identity = serde_json::from_value(row).unwrap();
        assert!(identity.role.is_none());
    }

    #[test]
    fn test_role_serializes_lowercase() {
        let identity = Identity::new(Uuid::nil(), "a@b.test", "A", Some(Role::Teacher));
        let value = serde_json::to_value(&identity).unwrap();
        assert_eq!(value["role"], "teacher");

        let back: Identity = serde_json::from_value(value).unwrap();
        assert_eq!(back, identity);
    }
}
