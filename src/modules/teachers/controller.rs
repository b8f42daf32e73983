use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use schoolhub_core::AppError;
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::role::{RequireAdmin, RequireMember};
use crate::modules::teachers::model::{CreateTeacherDto, Teacher, UpdateTeacherDto};
use crate::modules::teachers::service::TeacherService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[utoipa::path(
    get,
    path = "/api/teachers",
    responses(
        (status = 200, description = "Teachers ordered by name", body = Vec<Teacher>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Teachers",
    security(("bearer_auth" = []))
)]
#[instrument(skip_all)]
pub async fn get_teachers(
    State(state): State<AppState>,
    RequireMember(auth_user): RequireMember,
) -> Result<Json<Vec<Teacher>>, AppError> {
    let teachers = TeacherService::list(&auth_user.remote(&state)).await?;
    Ok(Json(teachers))
}

#[utoipa::path(
    get,
    path = "/api/teachers/{id}",
    params(("id" = Uuid, Path, description = "Teacher ID")),
    responses(
        (status = 200, description = "Teacher", body = Teacher),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Teacher not found")
    ),
    tag = "Teachers",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user))]
pub async fn get_teacher_by_id(
    State(state): State<AppState>,
    RequireMember(auth_user): RequireMember,
    Path(id): Path<Uuid>,
) -> Result<Json<Teacher>, AppError> {
    let teacher = TeacherService::get(&auth_user.remote(&state), id).await?;
    Ok(Json(teacher))
}

#[utoipa::path(
    post,
    path = "/api/teachers",
    request_body = CreateTeacherDto,
    responses(
        (status = 201, description = "Teacher created", body = Teacher),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - admins only"),
        (status = 422, description = "Validation error")
    ),
    tag = "Teachers",
    security(("bearer_auth" = []))
)]
#[instrument(skip_all)]
pub async fn create_teacher(
    State(state): State<AppState>,
    RequireAdmin(auth_user): RequireAdmin,
    ValidatedJson(dto): ValidatedJson<CreateTeacherDto>,
) -> Result<(StatusCode, Json<Teacher>), AppError> {
    let teacher = TeacherService::create(&auth_user.remote(&state), dto).await?;
    Ok((StatusCode::CREATED, Json(teacher)))
}

#[utoipa::path(
    put,
    path = "/api/teachers/{id}",
    params(("id" = Uuid, Path, description = "Teacher ID")),
    request_body = UpdateTeacherDto,
    responses(
        (status = 200, description = "Teacher updated", body = Teacher),
        (status = 400, description = "No fields to update"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - admins only"),
        (status = 404, description = "Teacher not found")
    ),
    tag = "Teachers",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user, dto))]
pub async fn update_teacher(
    State(state): State<AppState>,
    RequireAdmin(auth_user): RequireAdmin,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateTeacherDto>,
) -> Result<Json<Teacher>, AppError> {
    let teacher = TeacherService::update(&auth_user.remote(&state), id, dto).await?;
    Ok(Json(teacher))
}

#[utoipa::path(
    delete,
    path = "/api/teachers/{id}",
    params(("id" = Uuid, Path, description = "Teacher ID")),
    responses(
        (status = 204, description = "Teacher deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - admins only"),
        (status = 404, description = "Teacher not found")
    ),
    tag = "Teachers",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user))]
pub async fn delete_teacher(
    State(state): State<AppState>,
    RequireAdmin(auth_user): RequireAdmin,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    TeacherService::delete(&auth_user.remote(&state), id).await?;
    Ok(StatusCode::NO_CONTENT)
}
