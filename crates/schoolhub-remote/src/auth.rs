//! Password sign-in, sign-up, sign-out and current-user lookups against the
//! `/auth/v1` API.

use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::instrument;
use uuid::Uuid;

use crate::client::{RemoteClient, send};
use crate::error::RemoteError;

/// Account as known to the auth service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: Uuid,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub app_metadata: Value,
    #[serde(default)]
    pub user_metadata: Value,
}

/// Tokens issued by a successful password sign-in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthSession {
    pub access_token: String,
    pub refresh_token: String,
    #[serde(default)]
    pub token_type: String,
    pub expires_in: i64,
    pub user: AuthUser,
}

#[derive(Debug)]
pub struct AuthApi<'a> {
    client: &'a RemoteClient,
}

impl<'a> AuthApi<'a> {
    pub(crate) fn new(client: &'a RemoteClient) -> Self {
        Self { client }
    }

    #[instrument(skip(self, password))]
    pub async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthSession, RemoteError> {
        let request = self
            .client
            .request_with_bearer(Method::POST, "/auth/v1/token?grant_type=password", None)?
            .json(&json!({ "email": email, "password": password }));

        Ok(send(request).await?.json().await?)
    }

    /// Creates an account. `data` becomes the account's user metadata.
    ///
    /// The service answers with either the user or a session wrapping it,
    /// depending on whether email confirmation is required.
    #[instrument(skip(self, password, data))]
    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        data: Value,
    ) -> Result<AuthUser, RemoteError> {
        let request = self
            .client
            .request_with_bearer(Method::POST, "/auth/v1/signup", None)?
            .json(&json!({ "email": email, "password": password, "data": data }));

        let body: Value = send(request).await?.json().await?;
        let user = match body {
            Value::Object(mut map) if map.contains_key("user") => {
                map.remove("user").unwrap_or(Value::Null)
            }
            other => other,
        };

        serde_json::from_value(user).map_err(|e| RemoteError::Api {
            status: 502,
            message: format!("Unexpected sign-up response: {}", e),
        })
    }

    /// Revokes the session behind `access_token`.
    #[instrument(skip_all)]
    pub async fn sign_out(&self, access_token: &str) -> Result<(), RemoteError> {
        let request =
            self.client
                .request_with_bearer(Method::POST, "/auth/v1/logout", Some(access_token))?;
        send(request).await?;
        Ok(())
    }

    /// Account behind `access_token`, if the token is still valid.
    #[instrument(skip_all)]
    pub async fn get_user(&self, access_token: &str) -> Result<AuthUser, RemoteError> {
        let request =
            self.client
                .request_with_bearer(Method::GET, "/auth/v1/user", Some(access_token))?;
        Ok(send(request).await?.json().await?)
    }
}
