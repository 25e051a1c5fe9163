use anyhow::anyhow;
use classroll_core::AppError;
use classroll_db::SchoolStore;
use classroll_models::User;
use tracing::instrument;

pub struct UserService;

impl UserService {
    #[instrument(skip(store))]
    pub async fn get_user(store: &dyn SchoolStore, user_id: i32) -> Result<User, AppError> {
        store
            .find_user(user_id)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow!("User not found")))
    }

    #[instrument(skip(store))]
    pub async fn get_users(store: &dyn SchoolStore) -> Result<Vec<User>, AppError> {
        Ok(store.list_users().await?)
    }
}
