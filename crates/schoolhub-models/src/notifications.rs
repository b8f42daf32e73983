//! In-app notification feed rows.
//!
//! These are the announcements listed inside the app. Device push delivery
//! lives in [`crate::push`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::identity::Role;

/// Audience of a notification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TargetRole {
    #[default]
    All,
    Student,
    Teacher,
    Admin,
}

impl TargetRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetRole::All => "all",
            TargetRole::Student => "student",
            TargetRole::Teacher => "teacher",
            TargetRole::Admin => "admin",
        }
    }
}

impl From<Role> for TargetRole {
    fn from(role: Role) -> Self {
        match role {
            Role::Student => TargetRole::Student,
            Role::Teacher => TargetRole::Teacher,
            Role::Admin => TargetRole::Admin,
        }
    }
}

impl fmt::Display for TargetRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NotificationRecord {
    pub id: Uuid,
    pub title: String,
    pub message: String,
    #[serde(default)]
    pub target_role: TargetRole,
    #[serde(default)]
    pub created_by: Option<Uuid>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateNotificationDto {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(min = 1, max = 2000))]
    pub message: String,
    #[serde(default)]
    pub target_role: TargetRole,
}

/// Row inserted into the remote table, stamped with its author.
#[derive(Debug, Clone, Serialize)]
pub struct NewNotification {
    pub title: String,
    pub message: String,
    pub target_role: TargetRole,
    pub created_by: Uuid,
}

impl NewNotification {
    pub fn authored(dto: CreateNotificationDto, created_by: Uuid) -> Self {
        Self {
            title: dto.title,
            message: dto.message,
            target_role: dto.target_role,
            created_by,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_role_defaults_to_all() {
        let dto: CreateNotificationDto =
            serde_json::from_str(r#"{"title": "Closed", "message": "No school Friday"}"#).unwrap();
        assert_eq!(dto.target_role, TargetRole::All);
    }

    #[test]
    fn test_role_audience() {
        assert_eq!(TargetRole::from(Role::Student), TargetRole::Student);
        assert_eq!(TargetRole::from(Role::Admin).as_str(), "admin");
    }

    #[test]
    fn test_new_notification_row() {
        let dto = CreateNotificationDto {
            title: "PTA".into(),
            message: "Meeting at 4pm".into(),
            target_role: TargetRole::Teacher,
        };
        let row = NewNotification::authored(dto, Uuid::nil());
        let value = serde_json::to_value(row).unwrap();
        assert_eq!(value["target_role"], "teacher");
        assert_eq!(value["created_by"], Uuid::nil().to_string());
    }
}
