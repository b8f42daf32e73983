use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use schoolhub_core::AppError;
use tracing::instrument;
use utoipa::ToSchema;

use super::model::{Identity, LoginRequest, LoginResponse, MessageResponse, RegisterRequest};
use super::service::AuthService;
use crate::middleware::auth::AuthUser;
use crate::middleware::role::RequireAdmin;
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[derive(ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Sign in with email and password
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "Invalid credentials or malformed body", body = ErrorResponse),
        (status = 403, description = "Account has no profile", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, dto), fields(email = %dto.email))]
pub async fn login_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let response = AuthService::login(&state.remote, dto).await?;
    Ok(Json(response))
}

/// Revoke the caller's session
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    responses(
        (status = 200, description = "Signed out", body = MessageResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    tag = "Authentication",
    security(("bearer_auth" = []))
)]
#[instrument(skip_all, fields(user_id = %auth_user.user_id()))]
pub async fn logout_user(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<MessageResponse>, AppError> {
    AuthService::logout(&state.remote, &auth_user.token).await?;
    Ok(Json(MessageResponse::new("Signed out successfully")))
}

/// Profile of the signed-in user
#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses(
        (status = 200, description = "Caller's profile", body = Identity),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Profile not found", body = ErrorResponse)
    ),
    tag = "Authentication",
    security(("bearer_auth" = []))
)]
#[instrument(skip_all, fields(user_id = %auth_user.user_id()))]
pub async fn get_me(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<Identity>, AppError> {
    let identity = AuthService::fetch_identity(&auth_user.remote(&state), auth_user.user_id())
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Profile not found")))?;
    Ok(Json(identity))
}

/// Create an account (admins only)
#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created", body = Identity),
        (status = 400, description = "Email already registered or malformed body", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - admins only", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    tag = "Authentication",
    security(("bearer_auth" = []))
)]
#[instrument(skip_all)]
pub async fn register_user(
    State(state): State<AppState>,
    RequireAdmin(auth_user): RequireAdmin,
    ValidatedJson(dto): ValidatedJson<RegisterRequest>,
) -> Result<(StatusCode, Json<Identity>), AppError> {
    let identity = AuthService::register(&auth_user.remote(&state), dto).await?;
    Ok((StatusCode::CREATED, Json(identity)))
}
