//! Role gates.
//!
//! Each gate is an extractor wrapping [`AuthUser`]. Put it first in a
//! handler's arguments so authentication (401) and role (403) are decided
//! before the body or path are looked at.

use classroll_core::roles::{ADMIN_ROLES, STAFF_ROLES};
use classroll_core::{AppError, Role};

use crate::middleware::auth::AuthUser;

/// Fails with 403 unless the caller's role is in `allowed`.
pub fn check_any_role(auth_user: &AuthUser, allowed: &[Role]) -> Result<(), AppError> {
    if auth_user.role().is_member_of(allowed) {
        return Ok(());
    }

    let names: Vec<&str> = allowed.iter().map(|r| r.as_str()).collect();
    Err(AppError::forbidden(format!(
        "Access denied. Required role: {}",
        names.join(" or ")
    )))
}

/// Defines an extractor that admits only callers holding one of the given
/// roles.
#[macro_export]
macro_rules! require_roles {
    ($name:ident, $roles:expr) => {
        #[derive(Debug, Clone)]
        pub struct $name(pub $crate::middleware::auth::AuthUser);

        impl axum::extract::FromRequestParts<$crate::state::AppState> for $name {
            type Rejection = classroll_core::AppError;

            async fn from_request_parts(
                parts: &mut axum::http::request::Parts,
                state: &$crate::state::AppState,
            ) -> Result<Self, Self::Rejection> {
                let auth_user = <$crate::middleware::auth::AuthUser as axum::extract::FromRequestParts<
                    $crate::state::AppState,
                >>::from_request_parts(parts, state)
                .await?;

                $crate::middleware::role::check_any_role(&auth_user, $roles)?;

                Ok($name(auth_user))
            }
        }
    };
}

require_roles!(RequireAdmin, ADMIN_ROLES);
require_roles!(RequireStaff, STAFF_ROLES);

#[cfg(test)]
mod tests {
    use super::*;
    use classroll_auth::Claims;

    fn auth_user(role: Role) -> AuthUser {
        AuthUser(Claims {
            user_id: 1,
            email: "u@school.com".to_string(),
            role,
            exp: 9999999999,
            iat: 1234567890,
        })
    }

    #[test]
    fn test_staff_gate() {
        assert!(check_any_role(&auth_user(Role::Teacher), STAFF_ROLES).is_ok());
        assert!(check_any_role(&auth_user(Role::Admin), STAFF_ROLES).is_ok());

        let err = check_any_role(&auth_user(Role::Student), STAFF_ROLES).unwrap_err();
        assert_eq!(err.status.as_u16(), 403);
        assert_eq!(err.public_message(), "Access denied. Required role: teacher or admin");
    }

    #[test]
    fn test_admin_gate() {
        assert!(check_any_role(&auth_user(Role::Admin), ADMIN_ROLES).is_ok());
        assert!(check_any_role(&auth_user(Role::Teacher), ADMIN_ROLES).is_err());
        assert!(check_any_role(&auth_user(Role::Student), ADMIN_ROLES).is_err());
    }
}
