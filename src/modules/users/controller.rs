use axum::Json;
use axum::extract::State;
use classroll_core::AppError;
use classroll_models::User;
use tracing::instrument;

use super::service::UserService;
use crate::middleware::auth::AuthUser;
use crate::middleware::role::RequireAdmin;
use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;

/// Get the authenticated user's account
#[utoipa::path(
    get,
    path = "/api/users/me",
    responses(
        (status = 200, description = "Current user", body = User),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn get_profile(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<User>, AppError> {
    let user = UserService::get_user(state.store.as_ref(), auth_user.user_id()).await?;
    Ok(Json(user))
}

/// List all users, newest first
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "All users", body = Vec<User>),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - admin only", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn get_users(
    _admin: RequireAdmin,
    State(state): State<AppState>,
) -> Result<Json<Vec<User>>, AppError> {
    let users = UserService::get_users(state.store.as_ref()).await?;
    Ok(Json(users))
}
