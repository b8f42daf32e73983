use std::convert::Infallible;

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use schoolhub_auth::{Claims, verify_token};
use schoolhub_core::AppError;
use schoolhub_models::{AuthState, Identity, Role};
use schoolhub_remote::RemoteClient;
use uuid::Uuid;

use crate::state::AppState;

/// Caller authenticated by a bearer access token.
///
/// The identity is built from the token alone; the role comes from the
/// admin-assigned `app_metadata.role` claim.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub claims: Claims,
    pub identity: Identity,
    pub token: String,
}

impl AuthUser {
    pub fn from_claims(claims: Claims, token: impl Into<String>) -> Result<Self, AppError> {
        let id = claims
            .user_id()
            .ok_or_else(|| AppError::unauthorized("Invalid user ID in token"))?;
        let role = claims.app_role().and_then(|r| r.parse::<Role>().ok());
        let identity = Identity::new(
            id,
            claims.email.clone().unwrap_or_default(),
            claims.display_name().unwrap_or_default(),
            role,
        );

        Ok(Self {
            claims,
            identity,
            token: token.into(),
        })
    }

    pub fn user_id(&self) -> Uuid {
        self.identity.id
    }

    pub fn role(&self) -> Option<Role> {
        self.identity.role
    }

    pub fn auth_state(&self) -> AuthState {
        AuthState::signed_in(self.identity.clone())
    }

    /// Remote client acting as this caller.
    pub fn remote(&self, state: &AppState) -> RemoteClient {
        state.remote.as_user(&self.token)
    }
}

fn bearer_token(parts: &Parts) -> Result<&str, AppError> {
    let auth_header = parts
        .headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| AppError::unauthorized("Missing authorization header"))?;

    auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::unauthorized("Invalid authorization header format"))
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)?;
        let claims = verify_token(token, &state.jwt_config)?;
        AuthUser::from_claims(claims, token)
    }
}

/// Session state of the caller, whether signed in or not.
///
/// A missing or unusable token yields the signed-out state instead of a
/// rejection.
#[derive(Debug, Clone)]
pub struct Viewer(pub AuthState);

impl FromRequestParts<AppState> for Viewer {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_state = match AuthUser::from_request_parts(parts, state).await {
            Ok(user) => user.auth_state(),
            Err(_) => AuthState::signed_out(),
        };
        Ok(Viewer(auth_state))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use schoolhub_auth::AppMetadata;

    fn claims(sub: &str, role: Option<&str>) -> Claims {
        Claims {
            sub: sub.to_string(),
            email: Some("t@school.test".to_string()),
            role: Some("authenticated".to_string()),
            aud: "authenticated".to_string(),
            exp: 9999999999,
            iat: Some(1234567890),
            app_metadata: AppMetadata {
                role: role.map(str::to_string),
                provider: Some("email".to_string()),
            },
            user_metadata: serde_json::json!({"name": "Tola Adeyemi"}),
        }
    }

    #[test]
    fn test_identity_from_claims() {
        let id = Uuid::new_v4();
        let user = AuthUser::from_claims(claims(&id.to_string(), Some("teacher")), "tok").unwrap();

        assert_eq!(user.user_id(), id);
        assert_eq!(user.role(), Some(Role::Teacher));
        assert_eq!(user.identity.name, "Tola Adeyemi");
        assert!(user.auth_state().is_authenticated());
    }

    #[test]
    fn test_unknown_role_claim_is_no_role() {
        let user =
            AuthUser::from_claims(claims(&Uuid::new_v4().to_string(), Some("bursar")), "tok").unwrap();
        assert!(user.role().is_none());
    }

    #[test]
    fn test_bad_subject_is_unauthorized() {
        let err = AuthUser::from_claims(claims("service", None), "tok").unwrap_err();
        assert_eq!(err.status, axum::http::StatusCode::UNAUTHORIZED);
    }
}
