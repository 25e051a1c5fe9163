//! Authentication payloads.

use classroll_core::Role;
use classroll_core::validation::validate_email_format;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::users::User;

/// Registration request. `role` defaults to `student` when absent or empty.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    #[validate(custom(function = "validate_email_format"))]
    #[schema(example = "student@school.com")]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
    #[validate(custom(function = "validate_role_name"))]
    #[schema(example = "student")]
    pub role: Option<String>,
    #[validate(length(max = 200, message = "Full name must not exceed 200 characters"))]
    #[serde(default)]
    pub full_name: Option<String>,
}

impl RegisterRequest {
    /// The requested role, with the `student` default applied.
    ///
    /// Only meaningful after validation has passed.
    pub fn role(&self) -> Role {
        self.role
            .as_deref()
            .filter(|r| !r.is_empty())
            .and_then(|r| r.parse().ok())
            .unwrap_or_default()
    }
}

fn validate_role_name(role: &str) -> Result<(), ValidationError> {
    if role.is_empty() || role.parse::<Role>().is_ok() {
        return Ok(());
    }
    Err(ValidationError::new("role")
        .with_message("Invalid role. Must be student, teacher, or admin".into()))
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    #[schema(example = "password123")]
    pub password: String,
}

/// Returned by both register and login.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}
