use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use schoolhub_core::AppError;
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::role::{RequireMember, RequireStaff};
use crate::modules::exams::model::{CreateExamDto, Exam, ExamFilterParams, UpdateExamDto};
use crate::modules::exams::service::ExamService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[utoipa::path(
    get,
    path = "/api/exams",
    params(ExamFilterParams),
    responses(
        (status = 200, description = "Exams ordered by date", body = Vec<Exam>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Exams",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user))]
pub async fn get_exams(
    State(state): State<AppState>,
    RequireMember(auth_user): RequireMember,
    Query(filters): Query<ExamFilterParams>,
) -> Result<Json<Vec<Exam>>, AppError> {
    let exams = ExamService::list(&auth_user.remote(&state), filters).await?;
    Ok(Json(exams))
}

#[utoipa::path(
    get,
    path = "/api/exams/{id}",
    params(("id" = Uuid, Path, description = "Exam ID")),
    responses(
        (status = 200, description = "Exam", body = Exam),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Exam not found")
    ),
    tag = "Exams",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user))]
pub async fn get_exam_by_id(
    State(state): State<AppState>,
    RequireMember(auth_user): RequireMember,
    Path(id): Path<Uuid>,
) -> Result<Json<Exam>, AppError> {
    let exam = ExamService::get(&auth_user.remote(&state), id).await?;
    Ok(Json(exam))
}

#[utoipa::path(
    post,
    path = "/api/exams",
    request_body = CreateExamDto,
    responses(
        (status = 201, description = "Exam created", body = Exam),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - teachers and admins only"),
        (status = 422, description = "Validation error")
    ),
    tag = "Exams",
    security(("bearer_auth" = []))
)]
#[instrument(skip_all)]
pub async fn create_exam(
    State(state): State<AppState>,
    RequireStaff(auth_user): RequireStaff,
    ValidatedJson(dto): ValidatedJson<CreateExamDto>,
) -> Result<(StatusCode, Json<Exam>), AppError> {
    let exam = ExamService::create(&auth_user.remote(&state), dto).await?;
    Ok((StatusCode::CREATED, Json(exam)))
}

#[utoipa::path(
    put,
    path = "/api/exams/{id}",
    params(("id" = Uuid, Path, description = "Exam ID")),
    request_body = UpdateExamDto,
    responses(
        (status = 200, description = "Exam updated", body = Exam),
        (status = 400, description = "No fields to update"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - teachers and admins only"),
        (status = 404, description = "Exam not found")
    ),
    tag = "Exams",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user, dto))]
pub async fn update_exam(
    State(state): State<AppState>,
    RequireStaff(auth_user): RequireStaff,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateExamDto>,
) -> Result<Json<Exam>, AppError> {
    let exam = ExamService::update(&auth_user.remote(&state), id, dto).await?;
    Ok(Json(exam))
}

#[utoipa::path(
    delete,
    path = "/api/exams/{id}",
    params(("id" = Uuid, Path, description = "Exam ID")),
    responses(
        (status = 204, description = "Exam deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - teachers and admins only"),
        (status = 404, description = "Exam not found")
    ),
    tag = "Exams",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user))]
pub async fn delete_exam(
    State(state): State<AppState>,
    RequireStaff(auth_user): RequireStaff,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    ExamService::delete(&auth_user.remote(&state), id).await?;
    Ok(StatusCode::NO_CONTENT)
}
