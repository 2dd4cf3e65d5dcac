//! Repository layer for database operations.
//!
//! This module provides the `Repository` struct for all database operations.
//! Methods are organized across submodules by table:
//! - `users.rs` - User lookup and creation
//! - `reservations.rs` - Reservation listing for a guest
//! - `properties.rs` - Property search and store-backed creation
//! - `seed.rs` - Loading fixture data into the store

mod properties;
mod reservations;
mod seed;
mod users;

pub use seed::SeedReport;

use crate::error::StoreError;
use sqlx::PgPool;
use tracing::{error, info};

/// Repository for database operations.
///
/// Cloning is cheap: clones share the same pool.
#[derive(Debug, Clone)]
pub struct Repository {
    pool: PgPool,
}

impl Repository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Repository { pool }
    }

    /// The underlying pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Close the pool, waiting for checked-out connections to be returned.
    pub async fn close(&self) {
        self.pool.close().await;
        info!("Database pool closed");
    }
}

/// Log a failed statement and wrap it as a store failure.
fn store_failure(operation: &'static str, err: sqlx::Error) -> StoreError {
    error!(operation, error = %err, "Database query failed");
    StoreError::Database(err)
}
