use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use classroll_core::AppError;
use classroll_models::{
    CreateStudentFromUserRequest, CreateStudentRequest, Student, StudentSummary,
};
use tracing::instrument;

use super::service::StudentService;
use crate::middleware::auth::AuthUser;
use crate::middleware::role::{RequireAdmin, RequireStaff};
use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;
use crate::utils::ownership::ensure_student_access;
use crate::validator::{ValidatedJson, parse_path_id};

/// List every student record and every student account still waiting for one
#[utoipa::path(
    get,
    path = "/students",
    responses(
        (status = 200, description = "Student roster", body = Vec<StudentSummary>),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - teacher or admin only", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn get_students(
    _staff: RequireStaff,
    State(state): State<AppState>,
) -> Result<Json<Vec<StudentSummary>>, AppError> {
    let students = StudentService::get_students(state.store.as_ref()).await?;
    Ok(Json(students))
}

#[utoipa::path(
    post,
    path = "/students",
    request_body = CreateStudentRequest,
    responses(
        (status = 201, description = "Student created successfully", body = Student),
        (status = 400, description = "Bad request - validation error or invalid reference", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - admin only", body = ErrorResponse),
        (status = 404, description = "Linked user not found", body = ErrorResponse),
        (status = 409, description = "User already has a student profile", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Students"
)]
#[instrument(skip(state, dto))]
pub async fn create_student(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateStudentRequest>,
) -> Result<(StatusCode, Json<Student>), AppError> {
    let student = StudentService::create_student(state.store.as_ref(), dto).await?;
    Ok((StatusCode::CREATED, Json(student)))
}

/// Create the student record for an existing student account
#[utoipa::path(
    post,
    path = "/students/from-user",
    request_body = CreateStudentFromUserRequest,
    responses(
        (status = 201, description = "Student created and linked", body = Student),
        (status = 400, description = "Bad request - validation error or user is not a student", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - admin only", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 409, description = "User already has a student profile", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Students"
)]
#[instrument(skip(state, dto))]
pub async fn create_student_from_user(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateStudentFromUserRequest>,
) -> Result<(StatusCode, Json<Student>), AppError> {
    let student = StudentService::create_student_from_user(state.store.as_ref(), dto).await?;
    Ok((StatusCode::CREATED, Json(student)))
}

/// Get one student. Students may only read their own record.
#[utoipa::path(
    get,
    path = "/student/{id}",
    params(
        ("id" = i32, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Student details", body = Student),
        (status = 400, description = "Invalid student ID", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Not the caller's own record", body = ErrorResponse),
        (status = 404, description = "Student not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Students"
)]
#[instrument(skip(state, auth_user), fields(user_id = auth_user.user_id()))]
pub async fn get_student(
    auth_user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Student>, AppError> {
    let id = parse_path_id(&id, "student")?;
    ensure_student_access(state.store.as_ref(), &auth_user, id, "profile").await?;

    let student = StudentService::get_student(state.store.as_ref(), id).await?;
    Ok(Json(student))
}
