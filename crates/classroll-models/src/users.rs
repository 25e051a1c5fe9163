//! User account models.
//!
//! A [`User`] never carries the password hash; the hash only travels inside
//! [`UserCredentials`], which is not serializable.

use chrono::{DateTime, Utc};
use classroll_core::Role;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A user account as exposed by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub role: Role,
    pub full_name: String,
    /// Student record owned by this account, if one has been linked.
    pub student_id: Option<i32>,
    pub created_at: DateTime<Utc>,
}

/// A user together with the stored password hash, for login checks.
#[derive(Debug, Clone)]
pub struct UserCredentials {
    pub user: User,
    pub password_hash: String,
}

/// Everything needed to insert a user row.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    pub full_name: String,
}

/// Canonical form of an email address for storage and lookup.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
