use async_trait::async_trait;
use schoolhub_models::{PushMessage, PushTicket};
use serde_json::Value;

use crate::error::PushError;

/// External service that delivers messages to devices.
///
/// One call carries the whole batch; the returned tickets are in message
/// order, one per message the gateway accepted for processing.
#[async_trait]
pub trait PushGateway: Send + Sync {
    async fn send(&self, messages: &[PushMessage]) -> Result<Vec<PushTicket>, PushError>;
}

/// Reads the tickets out of a gateway response body.
///
/// `data` may be an array of tickets or a single ticket object; the latter
/// becomes a one-element list. A body without `data` is a failure, reported
/// with the messages of its `errors` array when present.
pub fn parse_gateway_response(body: &str) -> Result<Vec<PushTicket>, PushError> {
    let mut value: Value = serde_json::from_str(body)?;

    match value.get_mut("data").map(Value::take) {
        Some(Value::Array(items)) => items
            .into_iter()
            .map(serde_json::from_value)
            .collect::<Result<Vec<_>, _>>()
            .map_err(PushError::from),
        Some(single @ Value::Object(_)) => Ok(vec![serde_json::from_value(single)?]),
        _ => Err(PushError::gateway(None, error_summary(&value, body))),
    }
}

/// Joined `errors[].message` values, or the raw body when there are none.
pub(crate) fn error_summary(value: &Value, body: &str) -> String {
    let messages = value
        .get("errors")
        .and_then(Value::as_array)
        .map(|errors| {
            errors
                .iter()
                .filter_map(|e| e.get("message").and_then(Value::as_str))
                .collect::<Vec<_>>()
                .join("; ")
        })
        .unwrap_or_default();

    if messages.is_empty() {
        body.to_string()
    } else {
        messages
    }
}
