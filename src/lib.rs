//! # Classroll API
//!
//! A REST API built with Rust, Axum, and PostgreSQL for running a school's
//! day to day records: accounts, students, class groups, subjects, the
//! timetable and attendance.
//!
//! ## Architecture
//!
//! ```text
//! crates/
//! ├── classroll-core/    # AppError, roles, password hashing, input checks
//! ├── classroll-config/  # Environment-driven configuration
//! ├── classroll-auth/    # JWT claims and token handling
//! ├── classroll-models/  # Entities and request DTOs
//! └── classroll-db/      # SchoolStore trait and its PostgreSQL implementation
//! src/
//! ├── middleware/        # AuthUser extractor and role gates
//! ├── modules/           # Feature modules
//! └── utils/             # Ownership gate
//! ```
//!
//! Each feature module has the same shape:
//!
//! - `controller.rs`: HTTP handlers with their OpenAPI annotations
//! - `service.rs`: Business rules on top of the store
//! - `router.rs`: Axum router configuration
//!
//! ## Roles
//!
//! | Role | Can do |
//! |------|--------|
//! | Admin | Everything, including user listing and creating student records |
//! | Teacher | Read everything, list students, record and read attendance |
//! | Student | Read reference data, and their own profile and attendance |
//!
//! ## Authentication
//!
//! `POST /api/auth/login` returns a token valid for 24 hours by default.
//! Send it as `Authorization: Bearer <token>`.
//!
//! ## API Documentation
//!
//! - Scalar: `/scalar`
//! - OpenAPI JSON: `/api-docs/openapi.json`

pub mod docs;
pub mod logging;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod utils;
pub mod validator;
