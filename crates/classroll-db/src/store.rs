use async_trait::async_trait;
use classroll_models::{
    Attendance, Group, NewAttendance, NewUser, ScheduleEntry, Student, StudentProfile,
    StudentSummary, Subject, User, UserCredentials,
};

use crate::error::StoreResult;

/// Every read and write the API performs.
///
/// Lookups of a single row return `Ok(None)` when it does not exist; writes
/// report missing or unusable references as [`StoreError`](crate::StoreError)
/// variants so handlers can map them to client errors.
#[async_trait]
pub trait SchoolStore: Send + Sync + std::fmt::Debug {
    /// Checks that the backing database answers.
    async fn ping(&self) -> StoreResult<()>;

    // Users
    async fn find_credentials_by_email(&self, email: &str) -> StoreResult<Option<UserCredentials>>;
    async fn find_user(&self, id: i32) -> StoreResult<Option<User>>;
    /// Fails with `Conflict` if the email is taken.
    async fn create_user(&self, user: NewUser) -> StoreResult<User>;
    /// All users, newest first.
    async fn list_users(&self) -> StoreResult<Vec<User>>;
    /// The student record linked to a user, if any.
    async fn linked_student_id(&self, user_id: i32) -> StoreResult<Option<i32>>;

    // Students
    async fn find_student(&self, id: i32) -> StoreResult<Option<Student>>;
    async fn list_students(&self) -> StoreResult<Vec<StudentSummary>>;
    /// Inserts a student record and, when `link_user_id` is given, links it to
    /// that account atomically.
    ///
    /// The account must exist (`NotFound`), have the student role
    /// (`InvalidReference`) and not be linked yet (`Conflict`). An empty
    /// `profile.full_name` is filled in from the account.
    async fn create_student(
        &self,
        profile: StudentProfile,
        link_user_id: Option<i32>,
    ) -> StoreResult<Student>;

    // Reference data
    async fn list_groups(&self) -> StoreResult<Vec<Group>>;
    async fn list_subjects(&self) -> StoreResult<Vec<Subject>>;
    async fn list_schedules(&self) -> StoreResult<Vec<ScheduleEntry>>;
    async fn list_schedules_for_group(&self, group_id: i32) -> StoreResult<Vec<ScheduleEntry>>;

    // Attendance
    async fn create_attendance(&self, record: NewAttendance) -> StoreResult<Attendance>;
    /// Newest records first, capped at `ATTENDANCE_LIST_LIMIT`.
    async fn attendance_for_student(&self, student_id: i32) -> StoreResult<Vec<Attendance>>;
    /// Newest records first, capped at `ATTENDANCE_LIST_LIMIT`.
    async fn attendance_for_subject(&self, subject_id: i32) -> StoreResult<Vec<Attendance>>;
}
