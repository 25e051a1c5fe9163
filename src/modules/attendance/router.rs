use axum::{
    Router,
    routing::{get, post},
};

use super::controller::{get_attendance_by_student, get_attendance_by_subject, record_attendance};
use crate::state::AppState;

pub fn init_attendance_router() -> Router<AppState> {
    Router::new()
        .route("/attendance/subject", post(record_attendance))
        .route("/attendanceByStudentId/{id}", get(get_attendance_by_student))
        .route("/attendanceBySubjectId/{id}", get(get_attendance_by_subject))
}
