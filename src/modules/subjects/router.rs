use axum::{Router, routing::get};

use super::controller::get_subjects;
use crate::state::AppState;

pub fn init_subjects_router() -> Router<AppState> {
    Router::new().route("/subjects", get(get_subjects))
}
