use classroll_core::AppError;
use classroll_db::SchoolStore;

use crate::middleware::auth::AuthUser;

/// Lets a caller read data belonging to `student_id`.
///
/// Staff roles always pass. Owner-scoped callers pass only when their account
/// is linked to exactly that student; `what` names the resource in the 403
/// message ("profile", "attendance").
pub async fn ensure_student_access(
    store: &dyn SchoolStore,
    auth_user: &AuthUser,
    student_id: i32,
    what: &str,
) -> Result<(), AppError> {
    if !auth_user.role().is_owner_scoped() {
        return Ok(());
    }

    let linked = store.linked_student_id(auth_user.user_id()).await?;
    if linked == Some(student_id) {
        return Ok(());
    }

    tracing::warn!(
        user_id = auth_user.user_id(),
        requested_student_id = student_id,
        linked_student_id = ?linked,
        "Ownership check failed"
    );
    Err(AppError::forbidden(format!(
        "Access denied: you can only view your own {}",
        what
    )))
}
