//! Token signing configuration.
//!
//! The signing key is read once at startup. When `JWT_SECRET` is unset the
//! server falls back to a publicly known development key and logs a warning;
//! with `APP_ENV=production` a missing secret is a startup error instead.

use std::env;

use crate::server::AppEnvironment;
use crate::{ConfigError, parse_var};

/// Development-only signing key. Anyone can forge tokens signed with it.
pub const INSECURE_DEV_SECRET: &str = "classroll-dev-secret-change-me";

/// Default token lifetime: 24 hours.
pub const DEFAULT_ACCESS_TOKEN_EXPIRY: i64 = 24 * 60 * 60;

#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    pub access_token_expiry: i64,
}

impl JwtConfig {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            access_token_expiry: DEFAULT_ACCESS_TOKEN_EXPIRY,
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        let secret = env::var("JWT_SECRET").ok();
        let access_token_expiry = parse_var("JWT_EXPIRY", DEFAULT_ACCESS_TOKEN_EXPIRY)?;
        let mut config = Self::resolve(secret, AppEnvironment::from_env())?;
        config.access_token_expiry = access_token_expiry;
        Ok(config)
    }

    /// Picks the signing key for the given environment.
    pub fn resolve(secret: Option<String>, environment: AppEnvironment) -> Result<Self, ConfigError> {
        match secret.filter(|s| !s.trim().is_empty()) {
            Some(secret) => Ok(Self::new(secret)),
            None if environment.is_production() => Err(ConfigError::Missing("JWT_SECRET")),
            None => {
                tracing::warn!(
                    "JWT_SECRET is not set; signing tokens with the insecure development key"
                );
                Ok(Self::new(INSECURE_DEV_SECRET))
            }
        }
    }
}
