use axum::Json;
use axum::extract::State;
use classroll_core::AppError;
use classroll_models::Subject;
use tracing::instrument;

use super::service::SubjectService;
use crate::middleware::auth::AuthUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;

/// List subjects by name
#[utoipa::path(
    get,
    path = "/subjects",
    responses(
        (status = 200, description = "All subjects", body = Vec<Subject>),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Subjects"
)]
#[instrument(skip(state, _auth_user))]
pub async fn get_subjects(
    _auth_user: AuthUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<Subject>>, AppError> {
    let subjects = SubjectService::get_subjects(state.store.as_ref()).await?;
    Ok(Json(subjects))
}
