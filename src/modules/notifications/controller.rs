use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use schoolhub_core::AppError;
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::role::{RequireAdmin, RequireMember};
use crate::modules::notifications::model::{CreateNotificationDto, NotificationRecord};
use crate::modules::notifications::service::NotificationService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[utoipa::path(
    get,
    path = "/api/notifications",
    responses(
        (status = 200, description = "Notifications for the caller's role, newest first", body = Vec<NotificationRecord>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Notifications",
    security(("bearer_auth" = []))
)]
#[instrument(skip_all, fields(user_id = %auth_user.user_id()))]
pub async fn get_notifications(
    State(state): State<AppState>,
    RequireMember(auth_user): RequireMember,
) -> Result<Json<Vec<NotificationRecord>>, AppError> {
    // RequireMember only admits callers with a role
    let role = auth_user
        .role()
        .ok_or_else(|| AppError::unauthorized("Authentication required"))?;
    let feed = NotificationService::feed(&auth_user.remote(&state), role).await?;
    Ok(Json(feed))
}

#[utoipa::path(
    post,
    path = "/api/notifications",
    request_body = CreateNotificationDto,
    responses(
        (status = 201, description = "Notification created", body = NotificationRecord),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - admins only"),
        (status = 422, description = "Validation error")
    ),
    tag = "Notifications",
    security(("bearer_auth" = []))
)]
#[instrument(skip_all, fields(user_id = %auth_user.user_id()))]
pub async fn create_notification(
    State(state): State<AppState>,
    RequireAdmin(auth_user): RequireAdmin,
    ValidatedJson(dto): ValidatedJson<CreateNotificationDto>,
) -> Result<(StatusCode, Json<NotificationRecord>), AppError> {
    let record =
        NotificationService::create(&auth_user.remote(&state), auth_user.user_id(), dto).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

#[utoipa::path(
    delete,
    path = "/api/notifications/{id}",
    params(("id" = Uuid, Path, description = "Notification ID")),
    responses(
        (status = 204, description = "Notification deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - admins only"),
        (status = 404, description = "Notification not found")
    ),
    tag = "Notifications",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user))]
pub async fn delete_notification(
    State(state): State<AppState>,
    RequireAdmin(auth_user): RequireAdmin,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    NotificationService::delete(&auth_user.remote(&state), id).await?;
    Ok(StatusCode::NO_CONTENT)
}
