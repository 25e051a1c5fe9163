use classroll_core::AppError;
use classroll_db::SchoolStore;
use classroll_models::Group;
use tracing::instrument;

pub struct GroupService;

impl GroupService {
    #[instrument(skip(store))]
    pub async fn get_groups(store: &dyn SchoolStore) -> Result<Vec<Group>, AppError> {
        Ok(store.list_groups().await?)
    }
}
