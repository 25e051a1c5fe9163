use classroll_db::SchoolStore;

pub struct HealthService;

impl HealthService {
    pub async fn is_ready(store: &dyn SchoolStore) -> bool {
        match store.ping().await {
            Ok(()) => true,
            Err(err) => {
                tracing::error!(error = %err, "Health check failed");
                false
            }
        }
    }
}
