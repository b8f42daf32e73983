use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::{instrument, warn};
use utoipa::ToSchema;

use super::service::{FanOutService, RelayError};
use crate::state::AppState;

/// Aggregate failure returned when a relay cannot complete.
#[derive(ToSchema)]
pub struct RelayFailure {
    pub success: bool,
    pub error: String,
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        if self.is_rejection() {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": self.to_string() })),
            )
                .into_response();
        }

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "success": false, "error": self.to_string() })),
        )
            .into_response()
    }
}

/// Send a notification to a batch of device tokens
#[utoipa::path(
    post,
    path = "/functions/v1/send-push-notification",
    request_body = schoolhub_models::NotificationBatch,
    responses(
        (status = 200, description = "Batch relayed", body = schoolhub_models::DeliveryReport),
        (status = 400, description = "No push tokens provided"),
        (status = 500, description = "Relay failed", body = RelayFailure)
    ),
    tag = "Functions"
)]
#[instrument(skip_all)]
pub async fn send_push_notification(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<schoolhub_models::DeliveryReport>, RelayError> {
    let batch = FanOutService::parse_batch(&body).inspect_err(|e| {
        warn!(error = %e, "Unparsable push batch");
    })?;

    let report = FanOutService::dispatch(state.gateway.as_ref(), batch).await?;
    Ok(Json(report))
}

/// CORS pre-flight for the relay.
pub async fn preflight() -> &'static str {
    "ok"
}
