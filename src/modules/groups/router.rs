use axum::{Router, routing::get};

use super::controller::get_groups;
use crate::state::AppState;

pub fn init_groups_router() -> Router<AppState> {
    Router::new().route("/groups", get(get_groups))
}
