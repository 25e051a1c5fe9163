//! # Classroll Models
//!
//! Domain entities, request DTOs and response shapes for the Classroll API.
//!
//! # Modules
//!
//! - [`auth`]: Registration and login payloads
//! - [`users`]: User accounts
//! - [`students`]: Student records and the two ways of creating them
//! - [`groups`]: Class groups
//! - [`subjects`]: Subjects
//! - [`schedules`]: Timetable entries
//! - [`attendance`]: Attendance records
//!
//! Request DTOs carry their rules as `validator` attributes; entities derive
//! `sqlx::FromRow` where their columns map one to one.

pub mod attendance;
pub mod auth;
pub mod groups;
pub mod schedules;
pub mod students;
pub mod subjects;
pub mod users;

pub use classroll_core::Role;

pub use attendance::{ATTENDANCE_LIST_LIMIT, Attendance, CreateAttendanceRequest, NewAttendance};
pub use auth::{AuthResponse, LoginRequest, RegisterRequest};
pub use groups::Group;
pub use schedules::ScheduleEntry;
pub use students::{
    CreateStudentFromUserRequest, CreateStudentRequest, Student, StudentProfile, StudentSummary,
};
pub use subjects::Subject;
pub use users::{NewUser, User, UserCredentials};
