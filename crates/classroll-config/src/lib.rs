//! # Classroll Config
//!
//! Configuration structures loaded from environment variables:
//!
//! - [`jwt`]: token signing key and lifetime
//! - [`cors`]: allowed browser origins
//! - [`database`]: connection string and pool size
//! - [`server`]: listen address and startup switches
//!
//! Each config is built once at startup and handed to whoever needs it;
//! nothing here is global or mutable.
//!
//! # Example
//!
//! ```ignore
//! use classroll_config::{CorsConfig, DatabaseConfig, JwtConfig, ServerConfig};
//!
//! let jwt_config = JwtConfig::from_env()?;
//! let database_config = DatabaseConfig::from_env()?;
//! let cors_config = CorsConfig::from_env();
//! let server_config = ServerConfig::from_env()?;
//! ```

pub mod cors;
pub mod database;
pub mod jwt;
pub mod server;

pub use cors::CorsConfig;
pub use database::DatabaseConfig;
pub use jwt::JwtConfig;
pub use server::{AppEnvironment, ServerConfig};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{name} has an invalid value: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Reads an optional variable and parses it, falling back to `default` when unset.
pub(crate) fn parse_var<T: std::str::FromStr>(
    name: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
        _ => Ok(default),
    }
}
