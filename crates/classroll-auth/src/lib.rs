//! # Classroll Auth
//!
//! Stateless session tokens for the Classroll API.
//!
//! - [`claims`]: The identity carried inside a token
//! - [`jwt`]: Token creation and verification
//!
//! Tokens are HS256 JWTs signed with the key from
//! [`JwtConfig`](classroll_config::JwtConfig). They cannot be revoked: a token
//! stays valid until it expires, whatever happens to the account meanwhile.
//!
//! # Example
//!
//! ```ignore
//! use classroll_auth::{create_access_token, verify_token};
//! use classroll_config::JwtConfig;
//! use classroll_core::Role;
//!
//! let config = JwtConfig::from_env()?;
//! let token = create_access_token(7, "a@b.com", Role::Teacher, &config)?;
//! let claims = verify_token(&token, &config)?;
//! assert_eq!(claims.user_id, 7);
//! ```

pub mod claims;
pub mod jwt;

pub use claims::Claims;
pub use jwt::{create_access_token, create_access_token_at, verify_token};
