use axum::http::{HeaderValue, Method, header};
use axum::routing::get;
use axum::{Json, Router, middleware};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as _};

use classroll_config::CorsConfig;

use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::modules::attendance::router::init_attendance_router;
use crate::modules::auth::router::init_auth_router;
use crate::modules::groups::router::init_groups_router;
use crate::modules::health::router::init_health_router;
use crate::modules::schedules::router::init_schedules_router;
use crate::modules::students::router::init_students_router;
use crate::modules::subjects::router::init_subjects_router;
use crate::modules::users::router::init_users_router;
use crate::state::AppState;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let allowed_origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
        .allow_credentials(true)
}

pub fn init_router(state: AppState) -> Router {
    let cors = cors_layer(&state.cors_config);

    Router::new()
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .route("/api-docs/openapi.json", get(openapi_json))
        .nest(
            "/api",
            Router::new()
                .nest("/auth", init_auth_router())
                .nest("/users", init_users_router()),
        )
        .merge(init_students_router())
        .merge(init_groups_router())
        .merge(init_subjects_router())
        .merge(init_schedules_router())
        .merge(init_attendance_router())
        .merge(init_health_router())
        .with_state(state)
        .layer(cors)
        .layer(middleware::from_fn(logging_middleware))
}
