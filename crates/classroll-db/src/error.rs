//! Data layer errors and their HTTP mapping.

use anyhow::anyhow;
use classroll_core::AppError;
use thiserror::Error;

pub type StoreResult<T> = Result<T, StoreError>;

pub(crate) const EMAIL_TAKEN: &str = "Email is already registered";
pub(crate) const USER_NOT_FOUND: &str = "User not found";
pub(crate) const NOT_A_STUDENT: &str = "User is not a student";
pub(crate) const ALREADY_LINKED: &str = "User already has a student profile";
pub(crate) const UNKNOWN_GROUP: &str = "Invalid group_id. Please select a valid group";
pub(crate) const UNKNOWN_SUBJECT: &str = "Invalid subject_id: subject does not exist";
pub(crate) const UNKNOWN_STUDENT: &str = "Invalid student_id: student does not exist";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0}")]
    NotFound(String),

    /// A uniqueness rule was violated (duplicate email, second link to the
    /// same account or student).
    #[error("{0}")]
    Conflict(String),

    /// A write referenced a row that does not exist or cannot be used.
    #[error("{0}")]
    InvalidReference(String),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl StoreError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    pub fn invalid_reference(message: impl Into<String>) -> Self {
        Self::InvalidReference(message.into())
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(msg) => AppError::not_found(anyhow!(msg)),
            StoreError::Conflict(msg) => AppError::conflict(anyhow!(msg)),
            StoreError::InvalidReference(msg) => AppError::bad_request(anyhow!(msg)),
            StoreError::Database(e) => AppError::internal(e),
        }
    }
}
