//! User roles.
//!
//! A user holds exactly one role, fixed at registration. Role checks match on
//! this enum; role names only exist as strings at the JSON and SQL edges.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Student,
    Teacher,
    Admin,
}

/// Roles allowed to manage rosters and attendance.
pub const STAFF_ROLES: &[Role] = &[Role::Teacher, Role::Admin];

/// Roles allowed to administer accounts and student records.
pub const ADMIN_ROLES: &[Role] = &[Role::Admin];

impl Role {
    pub const ALL: [Role; 3] = [Role::Student, Role::Teacher, Role::Admin];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Teacher => "teacher",
            Role::Admin => "admin",
        }
    }

    /// Whether this role only sees data it owns.
    pub fn is_owner_scoped(self) -> bool {
        match self {
            Role::Student => true,
            Role::Teacher | Role::Admin => false,
        }
    }

    pub fn is_member_of(self, allowed: &[Role]) -> bool {
        allowed.contains(&self)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRole(pub String);

impl fmt::Display for UnknownRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid role '{}'. Must be student, teacher, or admin",
            self.0
        )
    }
}

impl std::error::Error for UnknownRole {}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "student" => Ok(Role::Student),
            "teacher" => Ok(Role::Teacher),
            "admin" => Ok(Role::Admin),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}
