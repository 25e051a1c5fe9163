use classroll_core::AppError;
use classroll_db::SchoolStore;
use classroll_models::ScheduleEntry;
use tracing::instrument;

pub struct ScheduleService;

impl ScheduleService {
    #[instrument(skip(store))]
    pub async fn get_all_schedules(store: &dyn SchoolStore) -> Result<Vec<ScheduleEntry>, AppError> {
        Ok(store.list_schedules().await?)
    }

    /// An unknown group simply has no entries.
    #[instrument(skip(store))]
    pub async fn get_group_schedule(
        store: &dyn SchoolStore,
        group_id: i32,
    ) -> Result<Vec<ScheduleEntry>, AppError> {
        Ok(store.list_schedules_for_group(group_id).await?)
    }
}
