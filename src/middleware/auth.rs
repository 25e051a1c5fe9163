use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use classroll_auth::{Claims, verify_token};
use classroll_core::{AppError, Role};

use crate::state::AppState;

/// Extractor that validates the bearer token and provides the caller's claims.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    pub fn user_id(&self) -> i32 {
        self.0.user_id
    }

    pub fn role(&self) -> Role {
        self.0.role
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::unauthorized("Missing authorization header"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::unauthorized("Invalid authorization header format"))?;

        let claims = verify_token(token, &state.jwt_config)?;

        Ok(AuthUser(claims))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let auth_user = AuthUser(Claims {
            user_id: 12,
            email: "t@school.com".to_string(),
            role: Role::Teacher,
            exp: 9999999999,
            iat: 1234567890,
        });

        assert_eq!(auth_user.user_id(), 12);
        assert_eq!(auth_user.role(), Role::Teacher);
    }
}
