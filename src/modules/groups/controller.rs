use axum::Json;
use axum::extract::State;
use classroll_core::AppError;
use classroll_models::Group;
use tracing::instrument;

use super::service::GroupService;
use crate::middleware::auth::AuthUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;

/// List class groups by name
#[utoipa::path(
    get,
    path = "/groups",
    responses(
        (status = 200, description = "All groups", body = Vec<Group>),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Groups"
)]
#[instrument(skip(state, _auth_user))]
pub async fn get_groups(
    _auth_user: AuthUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<Group>>, AppError> {
    let groups = GroupService::get_groups(state.store.as_ref()).await?;
    Ok(Json(groups))
}
