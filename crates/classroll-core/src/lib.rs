//! # Classroll Core
//!
//! Core types, errors, and utilities for the Classroll API.
//!
//! - [`errors`]: Application error type with HTTP response conversion
//! - [`password`]: bcrypt password hashing and verification
//! - [`roles`]: The closed set of user roles
//! - [`validation`]: Shared input checks used by request DTOs
//!
//! # Example
//!
//! ```ignore
//! use classroll_core::errors::AppError;
//! use classroll_core::password::{hash_password, verify_password};
//!
//! let error = AppError::not_found(anyhow::anyhow!("Student not found"));
//!
//! let hash = hash_password("secure_password")?;
//! assert!(verify_password("secure_password", &hash));
//! ```

pub mod errors;
pub mod password;
pub mod roles;
pub mod validation;

pub use errors::AppError;
pub use password::{hash_password, verify_password};
pub use roles::Role;
