use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use classroll_core::AppError;
use classroll_models::{Attendance, CreateAttendanceRequest};
use tracing::instrument;

use super::service::AttendanceService;
use crate::middleware::auth::AuthUser;
use crate::middleware::role::RequireStaff;
use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;
use crate::utils::ownership::ensure_student_access;
use crate::validator::{ValidatedJson, parse_path_id};

/// Record whether a student attended a subject on a day
#[utoipa::path(
    post,
    path = "/attendance/subject",
    request_body = CreateAttendanceRequest,
    responses(
        (status = 201, description = "Attendance recorded", body = Attendance),
        (status = 400, description = "Bad request - validation error or unknown student/subject", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - teacher or admin only", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Attendance"
)]
#[instrument(skip(state, dto))]
pub async fn record_attendance(
    _staff: RequireStaff,
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateAttendanceRequest>,
) -> Result<(StatusCode, Json<Attendance>), AppError> {
    let attendance = AttendanceService::record_attendance(state.store.as_ref(), dto).await?;
    Ok((StatusCode::CREATED, Json(attendance)))
}

/// Latest attendance of a student. Students may only read their own.
#[utoipa::path(
    get,
    path = "/attendanceByStudentId/{id}",
    params(
        ("id" = i32, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Up to 50 records, newest first", body = Vec<Attendance>),
        (status = 400, description = "Invalid student ID", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Not the caller's own attendance", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Attendance"
)]
#[instrument(skip(state, auth_user), fields(user_id = auth_user.user_id()))]
pub async fn get_attendance_by_student(
    auth_user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Attendance>>, AppError> {
    let student_id = parse_path_id(&id, "student")?;
    ensure_student_access(state.store.as_ref(), &auth_user, student_id, "attendance").await?;

    let records = AttendanceService::get_by_student(state.store.as_ref(), student_id).await?;
    Ok(Json(records))
}

/// Latest attendance for a subject
#[utoipa::path(
    get,
    path = "/attendanceBySubjectId/{id}",
    params(
        ("id" = i32, Path, description = "Subject ID")
    ),
    responses(
        (status = 200, description = "Up to 50 records, newest first", body = Vec<Attendance>),
        (status = 400, description = "Invalid subject ID", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - teacher or admin only", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Attendance"
)]
#[instrument(skip(state))]
pub async fn get_attendance_by_subject(
    _staff: RequireStaff,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Attendance>>, AppError> {
    let subject_id = parse_path_id(&id, "subject")?;
    let records = AttendanceService::get_by_subject(state.store.as_ref(), subject_id).await?;
    Ok(Json(records))
}
