use async_trait::async_trait;
use schoolhub_config::PushConfig;
use schoolhub_models::{PushMessage, PushTicket};
use tracing::{debug, instrument, warn};

use crate::error::PushError;
use crate::gateway::{PushGateway, error_summary, parse_gateway_response};

/// Gateway speaking the Expo push API: one JSON array POSTed per batch,
/// authorized with a bearer access token.
///
/// The HTTP client has no request timeout, so a hung gateway stalls the
/// caller until the connection drops.
#[derive(Clone, Debug)]
pub struct ExpoGateway {
    config: PushConfig,
    http: reqwest::Client,
}

impl ExpoGateway {
    pub fn new(config: PushConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl PushGateway for ExpoGateway {
    #[instrument(skip_all, fields(messages = messages.len()))]
    async fn send(&self, messages: &[PushMessage]) -> Result<Vec<PushTicket>, PushError> {
        let token = self
            .config
            .access_token
            .as_deref()
            .ok_or(PushError::MissingToken)?;

        let response = self
            .http
            .post(&self.config.endpoint)
            .header("Accept", "application/json")
            .header("Authorization", format!("Bearer {}", token))
            .json(messages)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        debug!(status = status.as_u16(), "Push gateway responded");

        if !status.is_success() {
            warn!(status = status.as_u16(), "Push gateway rejected batch");
            let message = serde_json::from_str(&body)
                .map(|value| error_summary(&value, &body))
                .unwrap_or_else(|_| body.clone());
            return Err(PushError::gateway(Some(status.as_u16()), message));
        }

        parse_gateway_response(&body)
    }
}
