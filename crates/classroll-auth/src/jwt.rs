//! Session token creation and verification.
//!
//! A token encodes `{user_id, email, role, iat, exp}` with
//! `exp = iat + access_token_expiry` (24 hours by default). Verification
//! checks the HS256 signature and the expiry; any failure is reported as a
//! single unauthorized error so callers cannot tell a forged token from an
//! expired one.

use anyhow::anyhow;
use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

use classroll_config::JwtConfig;
use classroll_core::{AppError, Role};

use crate::claims::Claims;

/// Issues a session token for the given identity, valid from now.
pub fn create_access_token(
    user_id: i32,
    email: &str,
    role: Role,
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    create_access_token_at(user_id, email, role, Utc::now().timestamp(), jwt_config)
}

/// Issues a session token as if it had been created at `issued_at`
/// (Unix seconds).
pub fn create_access_token_at(
    user_id: i32,
    email: &str,
    role: Role,
    issued_at: i64,
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    let iat = issued_at.max(0);
    let exp = (iat + jwt_config.access_token_expiry).max(0);

    let claims = Claims {
        user_id,
        email: email.to_string(),
        role,
        exp: exp as usize,
        iat: iat as usize,
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal(anyhow!("Failed to create token: {}", e)))
}

/// Verifies a session token and returns its claims.
///
/// # Errors
///
/// Returns an unauthorized error if the signature does not match, the token
/// is malformed, or it has expired.
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AppError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &Validation::new(Algorithm::HS256),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::unauthorized("Invalid or expired token"))
}
