//! # Classroll DB
//!
//! Data access for the Classroll API.
//!
//! Handlers never touch SQL directly: they go through the [`SchoolStore`]
//! trait, implemented for PostgreSQL by [`PgStore`]. With the `test-utils`
//! feature an in-memory implementation is available for tests that should
//! not need a database.
//!
//! # Example
//!
//! ```ignore
//! use classroll_config::DatabaseConfig;
//! use classroll_db::{PgStore, init_db_pool};
//!
//! let pool = init_db_pool(&DatabaseConfig::from_env()?).await?;
//! let store = PgStore::new(pool);
//! let groups = store.list_groups().await?;
//! ```

mod error;
mod postgres;
mod store;

#[cfg(feature = "test-utils")]
mod memory;

use classroll_config::DatabaseConfig;
use sqlx::postgres::PgPoolOptions;

pub use error::{StoreError, StoreResult};
pub use postgres::PgStore;
pub use store::SchoolStore;

#[cfg(feature = "test-utils")]
pub use memory::InMemoryStore;

// Re-export PgPool for convenience
pub use sqlx::PgPool;

/// Opens the PostgreSQL connection pool.
///
/// Called once at startup; the pool is cheap to clone and is shared by every
/// request through [`PgStore`].
pub async fn init_db_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.url)
        .await?;

    tracing::info!(
        max_connections = config.max_connections,
        "Database pool initialized"
    );

    Ok(pool)
}
