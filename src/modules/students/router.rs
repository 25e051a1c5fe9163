use axum::{
    Router,
    routing::{get, post},
};

use super::controller::{create_student, create_student_from_user, get_student, get_students};
use crate::state::AppState;

pub fn init_students_router() -> Router<AppState> {
    Router::new()
        .route("/students", get(get_students).post(create_student))
        .route("/students/from-user", post(create_student_from_user))
        .route("/student/{id}", get(get_student))
}
