use axum::Json;
use axum::extract::{Path, State};
use classroll_core::AppError;
use classroll_models::ScheduleEntry;
use tracing::instrument;

use super::service::ScheduleService;
use crate::middleware::auth::AuthUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;
use crate::validator::parse_path_id;

/// The whole timetable
#[utoipa::path(
    get,
    path = "/all_class_schedule",
    responses(
        (status = 200, description = "All timetable entries", body = Vec<ScheduleEntry>),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Schedules"
)]
#[instrument(skip(state, _auth_user))]
pub async fn get_all_schedules(
    _auth_user: AuthUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<ScheduleEntry>>, AppError> {
    let entries = ScheduleService::get_all_schedules(state.store.as_ref()).await?;
    Ok(Json(entries))
}

/// Timetable of one group
#[utoipa::path(
    get,
    path = "/schedule/group/{id}",
    params(
        ("id" = i32, Path, description = "Group ID")
    ),
    responses(
        (status = 200, description = "Timetable entries of the group", body = Vec<ScheduleEntry>),
        (status = 400, description = "Invalid group ID", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Schedules"
)]
#[instrument(skip(state, _auth_user))]
pub async fn get_group_schedule(
    _auth_user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<ScheduleEntry>>, AppError> {
    let group_id = parse_path_id(&id, "group")?;
    let entries = ScheduleService::get_group_schedule(state.store.as_ref(), group_id).await?;
    Ok(Json(entries))
}
