use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use schoolhub_core::AppError;
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::role::{RequireMember, RequireStaff};
use crate::modules::lectures::model::{
    CreateLectureDto, Lecture, LectureFilterParams, UpdateLectureDto,
};
use crate::modules::lectures::service::LectureService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[utoipa::path(
    get,
    path = "/api/lectures",
    params(LectureFilterParams),
    responses(
        (status = 200, description = "Lectures ordered by schedule", body = Vec<Lecture>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Lectures",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user))]
pub async fn get_lectures(
    State(state): State<AppState>,
    RequireMember(auth_user): RequireMember,
    Query(filters): Query<LectureFilterParams>,
) -> Result<Json<Vec<Lecture>>, AppError> {
    let lectures = LectureService::list(&auth_user.remote(&state), filters).await?;
    Ok(Json(lectures))
}

#[utoipa::path(
    get,
    path = "/api/lectures/{id}",
    params(("id" = Uuid, Path, description = "Lecture ID")),
    responses(
        (status = 200, description = "Lecture", body = Lecture),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Lecture not found")
    ),
    tag = "Lectures",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user))]
pub async fn get_lecture_by_id(
    State(state): State<AppState>,
    RequireMember(auth_user): RequireMember,
    Path(id): Path<Uuid>,
) -> Result<Json<Lecture>, AppError> {
    let lecture = LectureService::get(&auth_user.remote(&state), id).await?;
    Ok(Json(lecture))
}

#[utoipa::path(
    post,
    path = "/api/lectures",
    request_body = CreateLectureDto,
    responses(
        (status = 201, description = "Lecture created", body = Lecture),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - teachers and admins only"),
        (status = 422, description = "Validation error")
    ),
    tag = "Lectures",
    security(("bearer_auth" = []))
)]
#[instrument(skip_all)]
pub async fn create_lecture(
    State(state): State<AppState>,
    RequireStaff(auth_user): RequireStaff,
    ValidatedJson(dto): ValidatedJson<CreateLectureDto>,
) -> Result<(StatusCode, Json<Lecture>), AppError> {
    let lecture = LectureService::create(&auth_user.remote(&state), dto).await?;
    Ok((StatusCode::CREATED, Json(lecture)))
}

#[utoipa::path(
    put,
    path = "/api/lectures/{id}",
    params(("id" = Uuid, Path, description = "Lecture ID")),
    request_body = UpdateLectureDto,
    responses(
        (status = 200, description = "Lecture updated", body = Lecture),
        (status = 400, description = "No fields to update"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - teachers and admins only"),
        (status = 404, description = "Lecture not found")
    ),
    tag = "Lectures",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user, dto))]
pub async fn update_lecture(
    State(state): State<AppState>,
    RequireStaff(auth_user): RequireStaff,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateLectureDto>,
) -> Result<Json<Lecture>, AppError> {
    let lecture = LectureService::update(&auth_user.remote(&state), id, dto).await?;
    Ok(Json(lecture))
}

#[utoipa::path(
    delete,
    path = "/api/lectures/{id}",
    params(("id" = Uuid, Path, description = "Lecture ID")),
    responses(
        (status = 204, description = "Lecture deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - teachers and admins only"),
        (status = 404, description = "Lecture not found")
    ),
    tag = "Lectures",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user))]
pub async fn delete_lecture(
    State(state): State<AppState>,
    RequireStaff(auth_user): RequireStaff,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    LectureService::delete(&auth_user.remote(&state), id).await?;
    Ok(StatusCode::NO_CONTENT)
}
