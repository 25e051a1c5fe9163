//! Attendance records.
//!
//! One record says whether a student attended a subject on a given day.
//! Listings return at most [`ATTENDANCE_LIST_LIMIT`] records, newest day first.

use chrono::NaiveDate;
use classroll_core::validation::{parse_date, validate_iso_date};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

pub const ATTENDANCE_LIST_LIMIT: i64 = 50;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Attendance {
    pub id: i32,
    pub subject_id: i32,
    #[schema(example = "2024-09-02")]
    pub visit_day: NaiveDate,
    pub visited: bool,
    pub student_id: i32,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateAttendanceRequest {
    #[validate(range(min = 1, message = "Subject ID must be a positive integer"))]
    pub subject_id: i32,
    #[validate(custom(function = "validate_iso_date"))]
    #[schema(example = "2024-09-02")]
    pub visit_day: String,
    #[serde(default)]
    pub visited: bool,
    #[validate(range(min = 1, message = "Student ID must be a positive integer"))]
    pub student_id: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAttendance {
    pub subject_id: i32,
    pub visit_day: NaiveDate,
    pub visited: bool,
    pub student_id: i32,
}

impl NewAttendance {
    pub fn from_request(dto: &CreateAttendanceRequest) -> Option<Self> {
        Some(Self {
            subject_id: dto.subject_id,
            visit_day: parse_date(&dto.visit_day)?,
            visited: dto.visited,
            student_id: dto.student_id,
        })
    }
}
