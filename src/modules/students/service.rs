use anyhow::anyhow;
use classroll_core::AppError;
use classroll_db::SchoolStore;
use classroll_models::{
    CreateStudentFromUserRequest, CreateStudentRequest, Student, StudentProfile, StudentSummary,
};
use tracing::instrument;

fn invalid_birth_date() -> AppError {
    AppError::bad_request(anyhow!("birth_date: Date must use the YYYY-MM-DD format"))
}

pub struct StudentService;

impl StudentService {
    #[instrument(skip(store))]
    pub async fn get_students(store: &dyn SchoolStore) -> Result<Vec<StudentSummary>, AppError> {
        Ok(store.list_students().await?)
    }

    #[instrument(skip(store))]
    pub async fn get_student(store: &dyn SchoolStore, id: i32) -> Result<Student, AppError> {
        store
            .find_student(id)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow!("Student not found")))
    }

    /// Creates a student record, linking it to `dto.user_id` when given.
    #[instrument(skip(store, dto), fields(user_id = ?dto.user_id))]
    pub async fn create_student(
        store: &dyn SchoolStore,
        dto: CreateStudentRequest,
    ) -> Result<Student, AppError> {
        let profile = StudentProfile::from_request(&dto).ok_or_else(invalid_birth_date)?;
        Ok(store.create_student(profile, dto.user_id).await?)
    }

    /// Creates the student record for an existing student account, named
    /// after the account.
    #[instrument(skip(store, dto), fields(user_id = dto.user_id))]
    pub async fn create_student_from_user(
        store: &dyn SchoolStore,
        dto: CreateStudentFromUserRequest,
    ) -> Result<Student, AppError> {
        let profile = StudentProfile::from_user_request(&dto).ok_or_else(invalid_birth_date)?;
        Ok(store.create_student(profile, Some(dto.user_id)).await?)
    }
}
