use anyhow::anyhow;
use axum::extract::{FromRequest, Request, rejection::JsonRejection};
use axum::Json;
use classroll_core::AppError;
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

fn format_errors(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| match &error.message {
                Some(msg) => format!("{}: {}", field, msg),
                None => format!("{} is invalid", field),
            })
        })
        .collect();
    messages.sort();
    messages.join(", ")
}

/// JSON body extractor that runs `validator` rules before the handler sees
/// the value. Every failure, malformed JSON included, is a 400.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                let error_msg = rejection.body_text();

                if error_msg.contains("missing field") {
                    let field = error_msg
                        .split("missing field `")
                        .nth(1)
                        .and_then(|s| s.split('`').next())
                        .unwrap_or("unknown");
                    return AppError::bad_request(anyhow!("{} is required", field));
                }

                if error_msg.contains("invalid type") {
                    return AppError::bad_request(anyhow!("Invalid field type in request"));
                }

                if matches!(rejection, JsonRejection::MissingJsonContentType(_)) {
                    return AppError::bad_request(anyhow!(
                        "Missing 'Content-Type: application/json' header"
                    ));
                }

                AppError::bad_request(anyhow!("Invalid request body"))
            })?;

        value
            .validate()
            .map_err(|errors| AppError::bad_request(anyhow!("{}", format_errors(&errors))))?;

        Ok(ValidatedJson(value))
    }
}

/// Parses a numeric path segment into a positive id.
///
/// `label` names the resource in the error, e.g. `"student"` gives
/// "Invalid student ID".
pub fn parse_path_id(raw: &str, label: &str) -> Result<i32, AppError> {
    raw.parse::<i32>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| AppError::bad_request(anyhow!("Invalid {} ID", label)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use classroll_models::CreateAttendanceRequest;

    #[test]
    fn test_parse_path_id() {
        assert_eq!(parse_path_id("42", "student").unwrap(), 42);
        for raw in ["0", "-1", "abc", "", "1.5", "99999999999"] {
            let err = parse_path_id(raw, "student").unwrap_err();
            assert_eq!(err.status.as_u16(), 400);
            assert_eq!(err.public_message(), "Invalid student ID");
        }
    }

    #[test]
    fn test_format_errors_names_fields() {
        let dto = CreateAttendanceRequest {
            subject_id: 0,
            visit_day: String::new(),
            visited: false,
            student_id: 0,
        };
        let message = format_errors(&dto.validate().unwrap_err());

        assert!(message.contains("student_id: Student ID must be a positive integer"));
        assert!(message.contains("subject_id: Subject ID must be a positive integer"));
        assert!(message.contains("visit_day: "));
    }
}
