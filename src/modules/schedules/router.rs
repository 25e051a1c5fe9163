use axum::{Router, routing::get};

use super::controller::{get_all_schedules, get_group_schedule};
use crate::state::AppState;

pub fn init_schedules_router() -> Router<AppState> {
    Router::new()
        .route("/all_class_schedule", get(get_all_schedules))
        .route("/schedule/group/{id}", get(get_group_schedule))
}
