//! Connection pool lifecycle.
//!
//! One pool is created at process start and handed to the `Repository`;
//! each query checks a connection out for a single statement.

use crate::config::Config;
use crate::db::migrations::run_migrations;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

/// Open a pool against the configured database.
///
/// # Errors
/// Returns an error if no connection can be established.
pub async fn connect(config: &Config) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(config.connect_options())
        .await?;

    info!(
        host = %config.db_host,
        database = %config.db_name,
        max_connections = config.max_connections,
        "Connected to database"
    );
    Ok(pool)
}

/// Open a pool from a connection URL.
pub async fn connect_url(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Connect and make sure the schema exists.
pub async fn init_db(config: &Config) -> Result<PgPool, sqlx::Error> {
    let pool = connect(config).await?;
    run_migrations(&pool).await?;
    info!("Database initialized successfully");
    Ok(pool)
}
