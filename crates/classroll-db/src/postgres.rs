//! PostgreSQL implementation of [`SchoolStore`].
//!
//! All statements bind their parameters; nothing is built by string
//! concatenation. Display names that come from a join fall back to
//! `'No Group'` when the join misses.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use classroll_models::attendance::ATTENDANCE_LIST_LIMIT;
use classroll_models::{
    Attendance, Group, NewAttendance, NewUser, Role, ScheduleEntry, Student, StudentProfile,
    StudentSummary, Subject, User, UserCredentials,
};
use sqlx::{FromRow, PgConnection, PgPool};
use tracing::instrument;

use crate::error::{
    ALREADY_LINKED, EMAIL_TAKEN, NOT_A_STUDENT, StoreError, StoreResult, UNKNOWN_GROUP,
    UNKNOWN_STUDENT, UNKNOWN_SUBJECT, USER_NOT_FOUND,
};
use crate::store::SchoolStore;

#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct UserRow {
    id: i32,
    email: String,
    password: String,
    role: String,
    full_name: String,
    created_at: DateTime<Utc>,
    student_id: Option<i32>,
}

impl TryFrom<UserRow> for UserCredentials {
    type Error = StoreError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let role: Role = row
            .role
            .parse()
            .map_err(|e| StoreError::Database(sqlx::Error::Decode(Box::new(e))))?;

        Ok(UserCredentials {
            user: User {
                id: row.id,
                email: row.email,
                role,
                full_name: row.full_name,
                student_id: row.student_id,
                created_at: row.created_at,
            },
            password_hash: row.password,
        })
    }
}

/// Translates constraint violations into client-facing errors.
fn map_write_error(err: sqlx::Error) -> StoreError {
    if let Some(db_err) = err.as_database_error() {
        let constraint = db_err.constraint().unwrap_or_default();

        if db_err.is_unique_violation() {
            let message = match constraint {
                "users_email_key" => EMAIL_TAKEN,
                "users_student_id_key" => ALREADY_LINKED,
                _ => "Record already exists",
            };
            return StoreError::conflict(message);
        }

        if db_err.is_foreign_key_violation() {
            let message = if constraint.contains("group_id") {
                UNKNOWN_GROUP
            } else if constraint.contains("subject_id") {
                UNKNOWN_SUBJECT
            } else if constraint.contains("student_id") {
                UNKNOWN_STUDENT
            } else {
                "Referenced record does not exist"
            };
            return StoreError::invalid_reference(message);
        }
    }

    StoreError::Database(err)
}

async fn fetch_student(conn: &mut PgConnection, id: i32) -> StoreResult<Option<Student>> {
    let student = sqlx::query_as::<_, Student>(
        r#"
        SELECT s.id, s.full_name, s.gender, s.birth_date, s.group_id,
               COALESCE(sg.group_name, 'No Group') AS group_name,
               u.id AS user_id
        FROM students s
        LEFT JOIN student_groups sg ON sg.id = s.group_id
        LEFT JOIN users u ON u.student_id = s.id
        WHERE s.id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(conn)
    .await?;
    Ok(student)
}

#[async_trait]
impl SchoolStore for PgStore {
    async fn ping(&self) -> StoreResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_credentials_by_email(&self, email: &str) -> StoreResult<Option<UserCredentials>> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, email, password, role, COALESCE(full_name, '') AS full_name, \
             created_at, student_id \
             FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        row.map(UserCredentials::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_user(&self, id: i32) -> StoreResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, email, password, role, COALESCE(full_name, '') AS full_name, \
             created_at, student_id \
             FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row
            .map(UserCredentials::try_from)
            .transpose()?
            .map(|credentials| credentials.user))
    }

    #[instrument(skip(self, user), fields(email = %user.email, role = %user.role))]
    async fn create_user(&self, user: NewUser) -> StoreResult<User> {
        let row = sqlx::query_as::<_, UserRow>(
            "INSERT INTO users (email, password, role, full_name) VALUES ($1, $2, $3, $4) \
             RETURNING id, email, password, role, COALESCE(full_name, '') AS full_name, \
             created_at, student_id",
        )
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.role.as_str())
        .bind(&user.full_name)
        .fetch_one(&self.pool)
        .await
        .map_err(map_write_error)?;

        Ok(UserCredentials::try_from(row)?.user)
    }

    async fn list_users(&self) -> StoreResult<Vec<User>> {
        let rows = sqlx::query_as::<_, UserRow>(
            "SELECT id, email, password, role, COALESCE(full_name, '') AS full_name, \
             created_at, student_id \
             FROM users ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|row| UserCredentials::try_from(row).map(|c| c.user))
            .collect()
    }

    #[instrument(skip(self))]
    async fn linked_student_id(&self, user_id: i32) -> StoreResult<Option<i32>> {
        let linked: Option<Option<i32>> =
            sqlx::query_scalar("SELECT student_id FROM users WHERE id = $1")
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(linked.flatten())
    }

    #[instrument(skip(self))]
    async fn find_student(&self, id: i32) -> StoreResult<Option<Student>> {
        let mut conn = self.pool.acquire().await?;
        fetch_student(&mut conn, id).await
    }

    async fn list_students(&self) -> StoreResult<Vec<StudentSummary>> {
        // Student records (linked or not), then student accounts still
        // waiting for a record.
        let students = sqlx::query_as::<_, StudentSummary>(
            r#"
            SELECT s.id, u.id AS user_id, s.full_name, s.gender, s.birth_date, s.group_id,
                   COALESCE(sg.group_name, 'No Group') AS group_name
            FROM students s
            LEFT JOIN users u ON u.student_id = s.id
            LEFT JOIN student_groups sg ON sg.id = s.group_id

            UNION ALL

            SELECT NULL::INTEGER, u.id, COALESCE(NULLIF(u.full_name, ''), u.email),
                   NULL::TEXT, NULL::DATE, NULL::INTEGER, 'No Group'
            FROM users u
            WHERE u.role = 'student'
              AND u.student_id IS NULL

            ORDER BY id DESC NULLS LAST, user_id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(students)
    }

    #[instrument(skip(self, profile))]
    async fn create_student(
        &self,
        profile: StudentProfile,
        link_user_id: Option<i32>,
    ) -> StoreResult<Student> {
        let mut tx = self.pool.begin().await?;

        let full_name = match link_user_id {
            Some(user_id) => {
                let account: Option<(String, String, Option<i32>)> = sqlx::query_as(
                    "SELECT COALESCE(NULLIF(full_name, ''), email), role, student_id \
                     FROM users WHERE id = $1 FOR UPDATE",
                )
                .bind(user_id)
                .fetch_optional(&mut *tx)
                .await?;

                let (account_name, role, linked) =
                    account.ok_or_else(|| StoreError::not_found(USER_NOT_FOUND))?;
                if role != Role::Student.as_str() {
                    return Err(StoreError::invalid_reference(NOT_A_STUDENT));
                }
                if linked.is_some() {
                    return Err(StoreError::conflict(ALREADY_LINKED));
                }

                if profile.full_name.is_empty() {
                    account_name
                } else {
                    profile.full_name
                }
            }
            None => profile.full_name,
        };

        let student_id: i32 = sqlx::query_scalar(
            "INSERT INTO students (full_name, gender, birth_date, group_id) \
             VALUES ($1, $2, $3, $4) RETURNING id",
        )
        .bind(&full_name)
        .bind(&profile.gender)
        .bind(profile.birth_date)
        .bind(profile.group_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_write_error)?;

        if let Some(user_id) = link_user_id {
            sqlx::query("UPDATE users SET student_id = $1 WHERE id = $2")
                .bind(student_id)
                .bind(user_id)
                .execute(&mut *tx)
                .await
                .map_err(map_write_error)?;
        }

        let student = fetch_student(&mut tx, student_id)
            .await?
            .ok_or_else(|| StoreError::Database(sqlx::Error::RowNotFound))?;

        tx.commit().await?;

        tracing::info!(student_id, linked_user = ?link_user_id, "Student record created");
        Ok(student)
    }

    async fn list_groups(&self) -> StoreResult<Vec<Group>> {
        let groups = sqlx::query_as::<_, Group>(
            "SELECT id, group_name, faculty_id, course_year FROM student_groups \
             ORDER BY group_name, id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(groups)
    }

    async fn list_subjects(&self) -> StoreResult<Vec<Subject>> {
        let subjects = sqlx::query_as::<_, Subject>(
            "SELECT id, subject_name, subject_code, credits FROM subjects \
             ORDER BY subject_name, id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(subjects)
    }

    async fn list_schedules(&self) -> StoreResult<Vec<ScheduleEntry>> {
        let entries = sqlx::query_as::<_, ScheduleEntry>(
            r#"
            SELECT s.id, s.subject_name, s.time_slot, s.group_id,
                   COALESCE(sg.group_name, 'No Group') AS group_name
            FROM schedule s
            LEFT JOIN student_groups sg ON sg.id = s.group_id
            ORDER BY s.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(entries)
    }

    #[instrument(skip(self))]
    async fn list_schedules_for_group(&self, group_id: i32) -> StoreResult<Vec<ScheduleEntry>> {
        let entries = sqlx::query_as::<_, ScheduleEntry>(
            r#"
            SELECT s.id, s.subject_name, s.time_slot, s.group_id,
                   COALESCE(sg.group_name, 'No Group') AS group_name
            FROM schedule s
            LEFT JOIN student_groups sg ON sg.id = s.group_id
            WHERE s.group_id = $1
            ORDER BY s.id
            "#,
        )
        .bind(group_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(entries)
    }

    #[instrument(skip(self, record), fields(student_id = record.student_id, subject_id = record.subject_id))]
    async fn create_attendance(&self, record: NewAttendance) -> StoreResult<Attendance> {
        let attendance = sqlx::query_as::<_, Attendance>(
            "INSERT INTO attendance (subject_id, visit_day, visited, student_id) \
             VALUES ($1, $2, $3, $4) \
             RETURNING id, subject_id, visit_day, visited, student_id",
        )
        .bind(record.subject_id)
        .bind(record.visit_day)
        .bind(record.visited)
        .bind(record.student_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_write_error)?;

        Ok(attendance)
    }

    #[instrument(skip(self))]
    async fn attendance_for_student(&self, student_id: i32) -> StoreResult<Vec<Attendance>> {
        let records = sqlx::query_as::<_, Attendance>(
            "SELECT id, subject_id, visit_day, visited, student_id FROM attendance \
             WHERE student_id = $1 \
             ORDER BY visit_day DESC, id DESC \
             LIMIT $2",
        )
        .bind(student_id)
        .bind(ATTENDANCE_LIST_LIMIT)
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    #[instrument(skip(self))]
    async fn attendance_for_subject(&self, subject_id: i32) -> StoreResult<Vec<Attendance>> {
        let records = sqlx::query_as::<_, Attendance>(
            "SELECT id, subject_id, visit_day, visited, student_id FROM attendance \
             WHERE subject_id = $1 \
             ORDER BY visit_day DESC, id DESC \
             LIMIT $2",
        )
        .bind(subject_id)
        .bind(ATTENDANCE_LIST_LIMIT)
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }
}
