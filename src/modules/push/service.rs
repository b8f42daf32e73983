use schoolhub_models::{DeliveryReport, NotificationBatch, PushMessage};
use schoolhub_push::{PushError, PushGateway};
use thiserror::Error;
use tracing::{error, info, instrument};

use crate::metrics::{track_push_dispatch, track_push_failure};

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("No push tokens provided")]
    EmptyBatch,
    #[error("Notification content is required")]
    MissingNotification,
    #[error("Invalid request body: {0}")]
    InvalidBody(String),
    #[error(transparent)]
    Gateway(#[from] PushError),
}

impl RelayError {
    /// Rejections made before any gateway call.
    pub fn is_rejection(&self) -> bool {
        matches!(self, RelayError::EmptyBatch)
    }

    fn reason(&self) -> &'static str {
        match self {
            RelayError::EmptyBatch => "empty_batch",
            RelayError::MissingNotification => "missing_notification",
            RelayError::InvalidBody(_) => "invalid_body",
            RelayError::Gateway(_) => "gateway",
        }
    }
}

pub struct FanOutService;

impl FanOutService {
    /// Parses a raw function body into a batch.
    pub fn parse_batch(body: &[u8]) -> Result<NotificationBatch, RelayError> {
        serde_json::from_slice(body).map_err(|e| {
            track_push_failure("invalid_body");
            RelayError::InvalidBody(e.to_string())
        })
    }

    /// Sends one notification to every token in a single gateway call and
    /// tallies the tickets.
    ///
    /// An empty batch is rejected without touching the gateway. Tokens are
    /// forwarded in order, duplicates included.
    #[instrument(skip_all, fields(tokens = batch.tokens.len()))]
    pub async fn dispatch(
        gateway: &dyn PushGateway,
        batch: NotificationBatch,
    ) -> Result<DeliveryReport, RelayError> {
        let result = Self::relay(gateway, batch).await;

        match &result {
            Ok(report) => {
                track_push_dispatch(report);
                info!(
                    total_sent = report.total_sent,
                    success_count = report.success_count,
                    error_count = report.error_count,
                    "Push batch relayed"
                );
            }
            Err(e) => {
                track_push_failure(e.reason());
                error!(error = %e, "Push batch failed");
            }
        }

        result
    }

    async fn relay(
        gateway: &dyn PushGateway,
        batch: NotificationBatch,
    ) -> Result<DeliveryReport, RelayError> {
        if batch.tokens.is_empty() {
            return Err(RelayError::EmptyBatch);
        }
        let content = batch.notification.ok_or(RelayError::MissingNotification)?;

        let messages: Vec<PushMessage> = batch
            .tokens
            .iter()
            .map(|token| PushMessage::for_token(token.as_str(), &content))
            .collect();

        let tickets = gateway.send(&messages).await?;
        Ok(DeliveryReport::tally(messages.len(), tickets))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use schoolhub_models::{NotificationContent, PushTicket};
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingGateway {
        sent: Mutex<Vec<Vec<PushMessage>>>,
    }

    #[async_trait]
    impl PushGateway for RecordingGateway {
        async fn send(&self, messages: &[PushMessage]) -> Result<Vec<PushTicket>, PushError> {
            self.sent.lock().unwrap().push(messages.to_vec());
            Ok(messages
                .iter()
                .map(|_| PushTicket::Ok { id: None })
                .collect())
        }
    }

    fn batch(tokens: &[&str]) -> NotificationBatch {
        NotificationBatch {
            tokens: tokens.iter().map(|t| t.to_string()).collect(),
            notification: Some(NotificationContent {
                title: "Exam moved".to_string(),
                body: "Physics is now on Friday".to_string(),
                data: None,
            }),
        }
    }

    #[tokio::test]
    async fn test_empty_batch_skips_gateway() {
        let gateway = RecordingGateway::default();
        let err = FanOutService::dispatch(&gateway, batch(&[])).await.unwrap_err();

        assert!(matches!(err, RelayError::EmptyBatch));
        assert!(err.is_rejection());
        assert!(gateway.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_one_message_per_token_in_order() {
        let gateway = RecordingGateway::default();
        let report = FanOutService::dispatch(&gateway, batch(&["t1", "t2", "t1"]))
            .await
            .unwrap();

        assert_eq!(report.total_sent, 3);
        assert_eq!(report.success_count, 3);

        let sent = gateway.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        let to: Vec<&str> = sent[0].iter().map(|m| m.to.as_str()).collect();
        assert_eq!(to, ["t1", "t2", "t1"]);
        assert!(sent[0].iter().all(|m| m.badge == 1 && m.sound == "default"));
    }

    #[tokio::test]
    async fn test_missing_notification_fails() {
        let gateway = RecordingGateway::default();
        let batch = NotificationBatch {
            tokens: vec!["t1".to_string()],
            notification: None,
        };

        let err = FanOutService::dispatch(&gateway, batch).await.unwrap_err();
        assert!(matches!(err, RelayError::MissingNotification));
        assert!(!err.is_rejection());
    }

    #[test]
    fn test_parse_batch_rejects_garbage() {
        let err = FanOutService::parse_batch(b"not json").unwrap_err();
        assert!(matches!(err, RelayError::InvalidBody(_)));
    }
}
