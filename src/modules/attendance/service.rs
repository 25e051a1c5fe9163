use anyhow::anyhow;
use classroll_core::AppError;
use classroll_db::SchoolStore;
use classroll_models::{Attendance, CreateAttendanceRequest, NewAttendance};
use tracing::{info, instrument};

pub struct AttendanceService;

impl AttendanceService {
    #[instrument(skip(store, dto), fields(student_id = dto.student_id, subject_id = dto.subject_id))]
    pub async fn record_attendance(
        store: &dyn SchoolStore,
        dto: CreateAttendanceRequest,
    ) -> Result<Attendance, AppError> {
        let record = NewAttendance::from_request(&dto).ok_or_else(|| {
            AppError::bad_request(anyhow!("visit_day: Date must use the YYYY-MM-DD format"))
        })?;

        let attendance = store.create_attendance(record).await?;
        info!(attendance_id = attendance.id, "Attendance recorded");
        Ok(attendance)
    }

    /// A student without records, existing or not, gets an empty list.
    #[instrument(skip(store))]
    pub async fn get_by_student(
        store: &dyn SchoolStore,
        student_id: i32,
    ) -> Result<Vec<Attendance>, AppError> {
        Ok(store.attendance_for_student(student_id).await?)
    }

    #[instrument(skip(store))]
    pub async fn get_by_subject(
        store: &dyn SchoolStore,
        subject_id: i32,
    ) -> Result<Vec<Attendance>, AppError> {
        Ok(store.attendance_for_subject(subject_id).await?)
    }
}
