//! Push relay wire types.
//!
//! A [`NotificationBatch`] comes in, one [`PushMessage`] per device token goes
//! out to the gateway, the gateway answers with one [`PushTicket`] per message,
//! and the caller receives a [`DeliveryReport`].

use schoolhub_core::serde::deserialize_null_default;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NotificationContent {
    #[schema(example = "Exam schedule published")]
    pub title: String,
    #[schema(example = "Mid-term exams start on Monday")]
    pub body: String,
    /// Arbitrary payload forwarded to the device untouched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub data: Option<Value>,
}

/// Request body of the push relay.
///
/// Both fields default, and a `null` token list reads as empty, so that a
/// request missing them reaches the relay's own checks instead of failing
/// deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NotificationBatch {
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub tokens: Vec<String>,
    #[serde(default)]
    pub notification: Option<NotificationContent>,
}

/// Gateway message envelope for a single device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PushMessage {
    pub to: String,
    pub title: String,
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    pub sound: String,
    pub badge: u32,
}

impl PushMessage {
    pub const DEFAULT_SOUND: &'static str = "default";
    pub const BADGE: u32 = 1;

    pub fn for_token(token: impl Into<String>, content: &NotificationContent) -> Self {
        Self {
            to: token.into(),
            title: content.title.clone(),
            body: content.body.clone(),
            data: content.data.clone(),
            sound: Self::DEFAULT_SOUND.to_string(),
            badge: Self::BADGE,
        }
    }
}

/// Per-message outcome reported by the gateway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum PushTicket {
    Ok {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        id: Option<String>,
    },
    Error {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        #[schema(value_type = Option<Object>)]
        details: Option<Value>,
    },
}

impl PushTicket {
    pub fn is_ok(&self) -> bool {
        matches!(self, PushTicket::Ok { .. })
    }

    pub fn status(&self) -> &'static str {
        match self {
            PushTicket::Ok { .. } => "ok",
            PushTicket::Error { .. } => "error",
        }
    }
}

/// Aggregate outcome of one fan-out.
///
/// `success_count + error_count` always equals `results.len()`, which may
/// differ from `total_sent` if the gateway returns fewer tickets than it
/// was sent messages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryReport {
    pub success: bool,
    pub total_sent: usize,
    pub success_count: usize,
    pub error_count: usize,
    pub results: Vec<PushTicket>,
}

impl DeliveryReport {
    pub fn tally(total_sent: usize, results: Vec<PushTicket>) -> Self {
        let success_count = results.iter().filter(|t| t.is_ok()).count();
        Self {
            success: true,
            total_sent,
            success_count,
            error_count: results.len() - success_count,
            results,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_defaults() {
        let content = NotificationContent {
            title: "Hi".into(),
            body: "There".into(),
            data: Some(json!({"screen": "exams"})),
        };
        let value = serde_json::to_value(PushMessage::for_token("ExponentPushToken[a]", &content)).unwrap();
        assert_eq!(
            value,
            json!({
                "to": "ExponentPushToken[a]",
                "title": "Hi",
                "body": "There",
                "data": {"screen": "exams"},
                "sound": "default",
                "badge": 1
            })
        );
    }

    #[test]
    fn test_envelope_omits_missing_data() {
        let content = NotificationContent {
            title: "Hi".into(),
            body: "There".into(),
            data: None,
        };
        let value = serde_json::to_value(PushMessage::for_token("t", &content)).unwrap();
        assert!(value.get("data").is_none());
    }

    #[test]
    fn test_ticket_tagging() {
        let ok: PushTicket = serde_json::from_value(json!({"status": "ok", "id": "abc"})).unwrap();
        assert!(ok.is_ok());

        let err: PushTicket = serde_json::from_value(json!({
            "status": "error",
            "message": "\"x\" is not a registered push notification recipient",
            "details": {"error": "DeviceNotRegistered"}
        }))
        .unwrap();
        assert!(!err.is_ok());
        assert_eq!(err.status(), "error");
    }

    #[test]
    fn test_tally_counts_tickets_not_tokens() {
        let report = DeliveryReport::tally(
            4,
            vec![
                PushTicket::Ok { id: None },
                PushTicket::Error { message: None, details: None },
            ],
        );
        assert_eq!(report.total_sent, 4);
        assert_eq!(report.success_count, 1);
        assert_eq!(report.error_count, 1);
    }

    #[test]
    fn test_report_camel_case() {
        let value = serde_json::to_value(DeliveryReport::tally(0, vec![])).unwrap();
        assert!(value.get("totalSent").is_some());
        assert!(value.get("successCount").is_some());
        assert!(value.get("errorCount").is_some());
    }

    #[test]
    fn test_batch_missing_fields_default() {
        let batch: NotificationBatch = serde_json::from_str("{}").unwrap();
        assert!(batch.tokens.is_empty());
        assert!(batch.notification.is_none());
    }
}
