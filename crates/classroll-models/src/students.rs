//! Student records.
//!
//! A student row may stand alone or be linked to exactly one user account
//! with the `student` role. Linked rows are what give student users access to
//! their own data.

use chrono::NaiveDate;
use classroll_core::validation::{parse_date, validate_iso_date, validate_not_blank};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Group name reported for students without a group.
pub const NO_GROUP: &str = "No Group";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Student {
    pub id: i32,
    pub full_name: String,
    pub gender: String,
    pub birth_date: NaiveDate,
    pub group_id: Option<i32>,
    #[schema(example = "No Group")]
    pub group_name: String,
    pub user_id: Option<i32>,
}

/// One row of the staff roster.
///
/// The roster lists every student record plus every student-role account that
/// has no record yet. The latter have `id: null` and carry only what the
/// account knows about the person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct StudentSummary {
    pub id: Option<i32>,
    pub user_id: Option<i32>,
    pub full_name: String,
    pub gender: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub group_id: Option<i32>,
    pub group_name: String,
}

impl From<Student> for StudentSummary {
    fn from(student: Student) -> Self {
        Self {
            id: Some(student.id),
            user_id: student.user_id,
            full_name: student.full_name,
            gender: Some(student.gender),
            birth_date: Some(student.birth_date),
            group_id: student.group_id,
            group_name: student.group_name,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateStudentRequest {
    #[validate(custom(function = "validate_not_blank"))]
    #[schema(example = "Aigerim Nurlanovna")]
    pub full_name: String,
    #[validate(custom(function = "validate_not_blank"))]
    #[schema(example = "female")]
    pub gender: String,
    #[validate(custom(function = "validate_iso_date"))]
    #[schema(example = "2005-03-14")]
    pub birth_date: String,
    #[validate(range(min = 1, message = "Group ID must be a positive integer"))]
    pub group_id: Option<i32>,
    /// Account to link the new record to. Must be an unlinked student user.
    #[validate(range(min = 1, message = "User ID must be a positive integer"))]
    pub user_id: Option<i32>,
}

/// Creates a student record for an existing student account, taking the full
/// name from the account.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateStudentFromUserRequest {
    #[validate(range(min = 1, message = "User ID must be a positive integer"))]
    pub user_id: i32,
    #[validate(custom(function = "validate_not_blank"))]
    pub gender: String,
    #[validate(custom(function = "validate_iso_date"))]
    #[schema(example = "2005-03-14")]
    pub birth_date: String,
    #[validate(range(min = 1, message = "Group ID must be a positive integer"))]
    pub group_id: Option<i32>,
}

/// The per-person fields of a student record, already parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentProfile {
    pub full_name: String,
    pub gender: String,
    pub birth_date: NaiveDate,
    pub group_id: Option<i32>,
}

impl StudentProfile {
    /// Builds a profile from a validated request. Returns `None` if the birth
    /// date does not parse.
    pub fn from_request(dto: &CreateStudentRequest) -> Option<Self> {
        Some(Self {
            full_name: dto.full_name.trim().to_string(),
            gender: dto.gender.trim().to_string(),
            birth_date: parse_date(&dto.birth_date)?,
            group_id: dto.group_id,
        })
    }

    /// Like [`StudentProfile::from_request`], with the name left empty for the
    /// store to fill in from the linked account.
    pub fn from_user_request(dto: &CreateStudentFromUserRequest) -> Option<Self> {
        Some(Self {
            full_name: String::new(),
            gender: dto.gender.trim().to_string(),
            birth_date: parse_date(&dto.birth_date)?,
            group_id: dto.group_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> CreateStudentRequest {
        CreateStudentRequest {
            full_name: "Aigerim".to_string(),
            gender: "female".to_string(),
            birth_date: "2005-03-14".to_string(),
            group_id: Some(1),
            user_id: None,
        }
    }

    #[test]
    fn test_valid_request() {
        let dto = request();
        assert!(dto.validate().is_ok());

        let profile = StudentProfile::from_request(&dto).unwrap();
        assert_eq!(profile.birth_date, NaiveDate::from_ymd_opt(2005, 3, 14).unwrap());
        assert_eq!(profile.group_id, Some(1));
    }

    #[test]
    fn test_rejects_blank_name() {
        let mut dto = request();
        dto.full_name = "  ".to_string();
        let errors = dto.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("full_name"));
    }

    #[test]
    fn test_rejects_bad_birth_date() {
        let mut dto = request();
        dto.birth_date = "14.03.2005".to_string();
        assert!(dto.validate().is_err());
        assert!(StudentProfile::from_request(&dto).is_none());
    }

    #[test]
    fn test_rejects_non_positive_ids() {
        let mut dto = request();
        dto.group_id = Some(0);
        assert!(dto.validate().is_err());

        let mut dto = request();
        dto.user_id = Some(-3);
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_from_user_request_requires_user_id() {
        let dto = CreateStudentFromUserRequest {
            user_id: 0,
            gender: "male".to_string(),
            birth_date: "2004-01-02".to_string(),
            group_id: None,
        };
        let errors = dto.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("user_id"));
    }

    #[test]
    fn test_summary_from_student() {
        let student = Student {
            id: 4,
            full_name: "Dias".to_string(),
            gender: "male".to_string(),
            birth_date: NaiveDate::from_ymd_opt(2004, 1, 2).unwrap(),
            group_id: None,
            group_name: NO_GROUP.to_string(),
            user_id: Some(9),
        };
        let summary = StudentSummary::from(student);
        assert_eq!(summary.id, Some(4));
        assert_eq!(summary.user_id, Some(9));
        assert_eq!(summary.group_name, "No Group");
    }
}
