use classroll_core::AppError;
use classroll_db::SchoolStore;
use classroll_models::Subject;
use tracing::instrument;

pub struct SubjectService;

impl SubjectService {
    #[instrument(skip(store))]
    pub async fn get_subjects(store: &dyn SchoolStore) -> Result<Vec<Subject>, AppError> {
        Ok(store.list_subjects().await?)
    }
}
