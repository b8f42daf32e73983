use reqwest::{Method, RequestBuilder, Response};
use schoolhub_config::RemoteConfig;
use tracing::debug;

use crate::auth::AuthApi;
use crate::error::RemoteError;
use crate::query::Query;

/// HTTP client for the hosted platform.
///
/// Cheap to clone. Requests carry the public key as `apikey` and, as the
/// bearer credential, either the caller's access token (see
/// [`RemoteClient::as_user`]) or the public key itself.
#[derive(Clone, Debug)]
pub struct RemoteClient {
    config: RemoteConfig,
    http: reqwest::Client,
    bearer: Option<String>,
}

impl RemoteClient {
    pub fn new(config: RemoteConfig) -> Self {
        Self::with_http(config, reqwest::Client::new())
    }

    pub fn with_http(config: RemoteConfig, http: reqwest::Client) -> Self {
        Self {
            config,
            http,
            bearer: None,
        }
    }

    /// Same client acting on behalf of a signed-in user, so row-level
    /// policies on the remote side see that user.
    pub fn as_user(&self, access_token: impl Into<String>) -> Self {
        Self {
            config: self.config.clone(),
            http: self.http.clone(),
            bearer: Some(access_token.into()),
        }
    }

    /// Starts a query against a remote table.
    pub fn from(&self, table: impl Into<String>) -> Query<'_> {
        Query::new(self, table.into())
    }

    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi::new(self)
    }

    pub(crate) fn endpoint(&self, path: &str) -> Result<String, RemoteError> {
        let base = self
            .config
            .base_url()
            .ok_or(RemoteError::MissingConfig("SUPABASE_URL"))?;
        Ok(format!("{}{}", base, path))
    }

    pub(crate) fn anon_key(&self) -> Result<&str, RemoteError> {
        self.config
            .anon_key
            .as_deref()
            .ok_or(RemoteError::MissingConfig("SUPABASE_ANON_KEY"))
    }

    /// Request with the platform headers and the client's bearer credential.
    pub(crate) fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, RemoteError> {
        self.request_with_bearer(method, path, self.bearer.as_deref())
    }

    /// Request with the platform headers, authorized by `bearer` or, when
    /// absent, by the public key.
    pub(crate) fn request_with_bearer(
        &self,
        method: Method,
        path: &str,
        bearer: Option<&str>,
    ) -> Result<RequestBuilder, RemoteError> {
        let url = self.endpoint(path)?;
        let key = self.anon_key()?;
        debug!(%method, %url, "Remote request");

        Ok(self
            .http
            .request(method, url)
            .header("apikey", key)
            .header("Authorization", format!("Bearer {}", bearer.unwrap_or(key))))
    }
}

/// Sends a request and turns any non-success status into [`RemoteError::Api`].
pub(crate) async fn send(request: RequestBuilder) -> Result<Response, RemoteError> {
    let response = request.send().await?;
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(RemoteError::from_body(status.as_u16(), &body))
}
