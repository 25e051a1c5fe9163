use std::sync::Arc;

use classroll_config::{CorsConfig, JwtConfig};
use classroll_db::SchoolStore;

#[derive(Clone, Debug)]
pub struct AppState {
    pub store: Arc<dyn SchoolStore>,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
}

impl AppState {
    pub fn new<S>(store: S, jwt_config: JwtConfig, cors_config: CorsConfig) -> Self
    where
        S: SchoolStore + 'static,
    {
        Self {
            store: Arc::new(store),
            jwt_config,
            cors_config,
        }
    }
}
