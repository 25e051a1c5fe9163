use axum::{Router, routing::get};

use super::controller::{get_profile, get_users};
use crate::state::AppState;

pub fn init_users_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_users))
        .route("/me", get(get_profile))
}
