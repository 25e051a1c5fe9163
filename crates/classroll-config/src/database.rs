//! Database connection settings.
//!
//! `DATABASE_URL` is mandatory: the server refuses to start without it.

use std::env;

use crate::{ConfigError, parse_var};

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

impl DatabaseConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let url = env::var("DATABASE_URL")
            .ok()
            .filter(|url| !url.trim().is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        Ok(Self {
            url,
            max_connections: parse_var("DATABASE_MAX_CONNECTIONS", 10)?,
        })
    }
}
