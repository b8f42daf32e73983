//! Claim set of access tokens issued by the remote auth service.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Metadata only the project's service role can write.
///
/// The application role lives here because end users cannot change it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User ID (subject claim)
    pub sub: String,
    #[serde(default)]
    pub email: Option<String>,
    /// Database role of the session (`authenticated`), not the app role.
    #[serde(default)]
    pub role: Option<String>,
    pub aud: String,
    pub exp: usize,
    #[serde(default)]
    pub iat: Option<usize>,
    #[serde(default)]
    pub app_metadata: AppMetadata,
    /// User-editable profile metadata (display name and similar).
    #[serde(default)]
    pub user_metadata: serde_json::Value,
}

impl Claims {
    pub fn user_id(&self) -> Option<Uuid> {
        Uuid::parse_str(&self.sub).ok()
    }

    /// Raw application role string, if the project assigned one.
    pub fn app_role(&self) -> Option<&str> {
        self.app_metadata.role.as_deref()
    }

    pub fn display_name(&self) -> Option<&str> {
        self.user_metadata
            .get("name")
            .or_else(|| self.user_metadata.get("full_name"))
            .and_then(|v| v.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_from_hosted_token_payload() {
        let payload = serde_json::json!({
            "sub": "6f1c1c36-5a43-4b9e-9d8e-2a8a2b0c9f11",
            "email": "ada@school.test",
            "role": "authenticated",
            "aud": "authenticated",
            "exp": 9999999999u64,
            "iat": 1700000000,
            "app_metadata": {"provider": "email", "role": "teacher"},
            "user_metadata": {"name": "Ada Lovelace"}
        });

        let claims: Claims = serde_json::from_value(payload).unwrap();
        assert_eq!(claims.app_role(), Some("teacher"));
        assert_eq!(claims.display_name(), Some("Ada Lovelace"));
        assert!(claims.user_id().is_some());
    }

    #[test]
    fn test_missing_metadata_defaults() {
        let payload = serde_json::json!({
            "sub": "not-a-uuid",
            "aud": "authenticated",
            "exp": 1
        });

        let claims: Claims = serde_json::from_value(payload).unwrap();
        assert!(claims.app_role().is_none());
        assert!(claims.display_name().is_none());
        assert!(claims.user_id().is_none());
    }
}
