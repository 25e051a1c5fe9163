//! Field checks shared by request DTOs.
//!
//! These plug into `validator` through `#[validate(custom(function = ...))]`.

use std::borrow::Cow;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use validator::ValidationError;

/// Date format accepted for birth dates and attendance days.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+\-]+@[a-zA-Z0-9.\-]+\.[a-zA-Z]{2,}$")
        .expect("email pattern is a valid regex")
});

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email.trim())
}

pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

fn error(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

pub fn validate_email_format(email: &str) -> Result<(), ValidationError> {
    if is_valid_email(email) {
        Ok(())
    } else {
        Err(error("email", "Invalid email format"))
    }
}

pub fn validate_iso_date(value: &str) -> Result<(), ValidationError> {
    match parse_date(value) {
        Some(_) => Ok(()),
        None => Err(error("date", "Date must use the YYYY-MM-DD format")),
    }
}

pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(error("blank", "Value must not be blank"))
    } else {
        Ok(())
    }
}
