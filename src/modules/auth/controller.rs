use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use classroll_core::AppError;
use classroll_models::{AuthResponse, LoginRequest, RegisterRequest};
use tracing::instrument;
use utoipa::ToSchema;

use super::service::AuthService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// Body of every error response.
#[derive(ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Register a new account
#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered successfully", body = AuthResponse),
        (status = 400, description = "Bad request - validation error", body = ErrorResponse),
        (status = 409, description = "Email is already registered", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, dto))]
pub async fn register_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), AppError> {
    let response = AuthService::register(state.store.as_ref(), &state.jwt_config, dto).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// Login and receive a session token
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = AuthResponse),
        (status = 400, description = "Bad request - validation error", body = ErrorResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, dto))]
pub async fn login_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<LoginRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    let response = AuthService::login(state.store.as_ref(), &state.jwt_config, dto).await?;
    Ok(Json(response))
}
