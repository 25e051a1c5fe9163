//! In-memory [`SchoolStore`] for tests.
//!
//! Mirrors the constraints the PostgreSQL schema enforces (unique emails,
//! one link per account and per student, foreign keys on writes) so handler
//! tests see the same errors they would against a real database.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use classroll_models::attendance::ATTENDANCE_LIST_LIMIT;
use classroll_models::students::NO_GROUP;
use classroll_models::{
    Attendance, Group, NewAttendance, NewUser, Role, ScheduleEntry, Student, StudentProfile,
    StudentSummary, Subject, User, UserCredentials,
};
use tokio::sync::Mutex;

use crate::error::{
    ALREADY_LINKED, EMAIL_TAKEN, NOT_A_STUDENT, StoreError, StoreResult, UNKNOWN_GROUP,
    UNKNOWN_STUDENT, UNKNOWN_SUBJECT, USER_NOT_FOUND,
};
use crate::store::SchoolStore;

#[derive(Debug, Clone)]
struct StudentRecord {
    id: i32,
    full_name: String,
    gender: String,
    birth_date: NaiveDate,
    group_id: Option<i32>,
}

#[derive(Debug, Clone)]
struct ScheduleRecord {
    id: i32,
    subject_name: String,
    time_slot: String,
    group_id: Option<i32>,
}

#[derive(Debug, Default)]
struct Tables {
    users: Vec<UserCredentials>,
    students: Vec<StudentRecord>,
    groups: Vec<Group>,
    subjects: Vec<Subject>,
    schedules: Vec<ScheduleRecord>,
    attendance: Vec<Attendance>,
    last_id: i32,
}

impl Tables {
    fn next_id(&mut self) -> i32 {
        self.last_id += 1;
        self.last_id
    }

    fn group_name(&self, group_id: Option<i32>) -> String {
        group_id
            .and_then(|id| self.groups.iter().find(|g| g.id == id))
            .map(|g| g.group_name.clone())
            .unwrap_or_else(|| NO_GROUP.to_string())
    }

    fn student(&self, record: &StudentRecord) -> Student {
        Student {
            id: record.id,
            full_name: record.full_name.clone(),
            gender: record.gender.clone(),
            birth_date: record.birth_date,
            group_id: record.group_id,
            group_name: self.group_name(record.group_id),
            user_id: self
                .users
                .iter()
                .find(|c| c.user.student_id == Some(record.id))
                .map(|c| c.user.id),
        }
    }

    fn schedule(&self, record: &ScheduleRecord) -> ScheduleEntry {
        ScheduleEntry {
            id: record.id,
            subject_name: record.subject_name.clone(),
            time_slot: record.time_slot.clone(),
            group_id: record.group_id,
            group_name: self.group_name(record.group_id),
        }
    }

    fn recent_attendance(&self, matches: impl Fn(&Attendance) -> bool) -> Vec<Attendance> {
        let mut records: Vec<Attendance> =
            self.attendance.iter().filter(|a| matches(*a)).cloned().collect();
        records.sort_by(|a, b| b.visit_day.cmp(&a.visit_day).then(b.id.cmp(&a.id)));
        records.truncate(ATTENDANCE_LIST_LIMIT as usize);
        records
    }
}

/// A store that keeps everything in process memory.
///
/// Ids come from a single counter shared by all tables.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    tables: Mutex<Tables>,
    unavailable: AtomicBool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes [`SchoolStore::ping`] fail, as if the database went away.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    pub async fn insert_group(&self, group_name: &str, faculty_id: i32, course_year: i32) -> Group {
        let mut tables = self.tables.lock().await;
        let group = Group {
            id: tables.next_id(),
            group_name: group_name.to_string(),
            faculty_id,
            course_year,
        };
        tables.groups.push(group.clone());
        group
    }

    pub async fn insert_subject(&self, subject_name: &str, subject_code: &str, credits: i32) -> Subject {
        let mut tables = self.tables.lock().await;
        let subject = Subject {
            id: tables.next_id(),
            subject_name: subject_name.to_string(),
            subject_code: subject_code.to_string(),
            credits,
        };
        tables.subjects.push(subject.clone());
        subject
    }

    pub async fn insert_schedule(
        &self,
        subject_name: &str,
        time_slot: &str,
        group_id: Option<i32>,
    ) -> ScheduleEntry {
        let mut tables = self.tables.lock().await;
        let record = ScheduleRecord {
            id: tables.next_id(),
            subject_name: subject_name.to_string(),
            time_slot: time_slot.to_string(),
            group_id,
        };
        tables.schedules.push(record.clone());
        tables.schedule(&record)
    }
}

#[async_trait]
impl SchoolStore for InMemoryStore {
    async fn ping(&self) -> StoreResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }

    async fn find_credentials_by_email(&self, email: &str) -> StoreResult<Option<UserCredentials>> {
        let tables = self.tables.lock().await;
        Ok(tables.users.iter().find(|c| c.user.email == email).cloned())
    }

    async fn find_user(&self, id: i32) -> StoreResult<Option<User>> {
        let tables = self.tables.lock().await;
        Ok(tables
            .users
            .iter()
            .find(|c| c.user.id == id)
            .map(|c| c.user.clone()))
    }

    async fn create_user(&self, user: NewUser) -> StoreResult<User> {
        let mut tables = self.tables.lock().await;
        if tables.users.iter().any(|c| c.user.email == user.email) {
            return Err(StoreError::conflict(EMAIL_TAKEN));
        }

        let created = User {
            id: tables.next_id(),
            email: user.email,
            role: user.role,
            full_name: user.full_name,
            student_id: None,
            created_at: Utc::now(),
        };
        tables.users.push(UserCredentials {
            user: created.clone(),
            password_hash: user.password_hash,
        });
        Ok(created)
    }

    async fn list_users(&self) -> StoreResult<Vec<User>> {
        let tables = self.tables.lock().await;
        let mut users: Vec<User> = tables.users.iter().map(|c| c.user.clone()).collect();
        users.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(users)
    }

    async fn linked_student_id(&self, user_id: i32) -> StoreResult<Option<i32>> {
        let tables = self.tables.lock().await;
        Ok(tables
            .users
            .iter()
            .find(|c| c.user.id == user_id)
            .and_then(|c| c.user.student_id))
    }

    async fn find_student(&self, id: i32) -> StoreResult<Option<Student>> {
        let tables = self.tables.lock().await;
        Ok(tables
            .students
            .iter()
            .find(|s| s.id == id)
            .map(|s| tables.student(s)))
    }

    async fn list_students(&self) -> StoreResult<Vec<StudentSummary>> {
        let tables = self.tables.lock().await;

        let mut records: Vec<StudentSummary> = tables
            .students
            .iter()
            .map(|s| StudentSummary::from(tables.student(s)))
            .collect();
        records.sort_by(|a, b| b.id.cmp(&a.id));

        let mut waiting: Vec<StudentSummary> = tables
            .users
            .iter()
            .map(|c| &c.user)
            .filter(|u| u.role == Role::Student && u.student_id.is_none())
            .map(|u| StudentSummary {
                id: None,
                user_id: Some(u.id),
                full_name: if u.full_name.is_empty() {
                    u.email.clone()
                } else {
                    u.full_name.clone()
                },
                gender: None,
                birth_date: None,
                group_id: None,
                group_name: NO_GROUP.to_string(),
            })
            .collect();
        waiting.sort_by(|a, b| b.user_id.cmp(&a.user_id));

        records.extend(waiting);
        Ok(records)
    }

    async fn create_student(
        &self,
        profile: StudentProfile,
        link_user_id: Option<i32>,
    ) -> StoreResult<Student> {
        let mut tables = self.tables.lock().await;

        let mut full_name = profile.full_name;
        if let Some(user_id) = link_user_id {
            let account = tables
                .users
                .iter()
                .find(|c| c.user.id == user_id)
                .map(|c| &c.user)
                .ok_or_else(|| StoreError::not_found(USER_NOT_FOUND))?;
            if account.role != Role::Student {
                return Err(StoreError::invalid_reference(NOT_A_STUDENT));
            }
            if account.student_id.is_some() {
                return Err(StoreError::conflict(ALREADY_LINKED));
            }
            if full_name.is_empty() {
                full_name = if account.full_name.is_empty() {
                    account.email.clone()
                } else {
                    account.full_name.clone()
                };
            }
        }

        if let Some(group_id) = profile.group_id {
            if !tables.groups.iter().any(|g| g.id == group_id) {
                return Err(StoreError::invalid_reference(UNKNOWN_GROUP));
            }
        }

        let record = StudentRecord {
            id: tables.next_id(),
            full_name,
            gender: profile.gender,
            birth_date: profile.birth_date,
            group_id: profile.group_id,
        };
        tables.students.push(record.clone());

        if let Some(user_id) = link_user_id {
            if let Some(account) = tables.users.iter_mut().find(|c| c.user.id == user_id) {
                account.user.student_id = Some(record.id);
            }
        }

        Ok(tables.student(&record))
    }

    async fn list_groups(&self) -> StoreResult<Vec<Group>> {
        let tables = self.tables.lock().await;
        let mut groups = tables.groups.clone();
        groups.sort_by(|a, b| a.group_name.cmp(&b.group_name).then(a.id.cmp(&b.id)));
        Ok(groups)
    }

    async fn list_subjects(&self) -> StoreResult<Vec<Subject>> {
        let tables = self.tables.lock().await;
        let mut subjects = tables.subjects.clone();
        subjects.sort_by(|a, b| a.subject_name.cmp(&b.subject_name).then(a.id.cmp(&b.id)));
        Ok(subjects)
    }

    async fn list_schedules(&self) -> StoreResult<Vec<ScheduleEntry>> {
        let tables = self.tables.lock().await;
        let mut entries: Vec<ScheduleEntry> =
            tables.schedules.iter().map(|s| tables.schedule(s)).collect();
        entries.sort_by_key(|e| e.id);
        Ok(entries)
    }

    async fn list_schedules_for_group(&self, group_id: i32) -> StoreResult<Vec<ScheduleEntry>> {
        let tables = self.tables.lock().await;
        let mut entries: Vec<ScheduleEntry> = tables
            .schedules
            .iter()
            .filter(|s| s.group_id == Some(group_id))
            .map(|s| tables.schedule(s))
            .collect();
        entries.sort_by_key(|e| e.id);
        Ok(entries)
    }

    async fn create_attendance(&self, record: NewAttendance) -> StoreResult<Attendance> {
        let mut tables = self.tables.lock().await;
        if !tables.subjects.iter().any(|s| s.id == record.subject_id) {
            return Err(StoreError::invalid_reference(UNKNOWN_SUBJECT));
        }
        if !tables.students.iter().any(|s| s.id == record.student_id) {
            return Err(StoreError::invalid_reference(UNKNOWN_STUDENT));
        }

        let attendance = Attendance {
            id: tables.next_id(),
            subject_id: record.subject_id,
            visit_day: record.visit_day,
            visited: record.visited,
            student_id: record.student_id,
        };
        tables.attendance.push(attendance.clone());
        Ok(attendance)
    }

    async fn attendance_for_student(&self, student_id: i32) -> StoreResult<Vec<Attendance>> {
        let tables = self.tables.lock().await;
        Ok(tables.recent_attendance(|a| a.student_id == student_id))
    }

    async fn attendance_for_subject(&self, subject_id: i32) -> StoreResult<Vec<Attendance>> {
        let tables = self.tables.lock().await;
        Ok(tables.recent_attendance(|a| a.subject_id == subject_id))
    }
}
