//! Password hashing with bcrypt.
//!
//! Hashes carry their own random salt and cost, so the same password never
//! produces the same hash twice.

use anyhow::anyhow;
use bcrypt::{DEFAULT_COST, hash, verify};

use crate::errors::AppError;

/// Hashes a plaintext password at bcrypt's default cost.
///
/// Only fails when the underlying RNG or bcrypt itself fails, which is
/// reported as an internal error.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    hash(password, DEFAULT_COST)
        .map_err(|e| AppError::internal(anyhow!("Failed to hash password: {}", e)))
}

/// Checks a plaintext password against a stored hash.
///
/// A malformed hash is treated as a mismatch.
pub fn verify_password(password: &str, hash: &str) -> bool {
    match verify(password, hash) {
        Ok(matches) => matches,
        Err(e) => {
            tracing::warn!(error = %e, "Stored password hash could not be parsed");
            false
        }
    }
}
