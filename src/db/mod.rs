//! Database module for PostgreSQL operations.
//!
//! This module provides:
//! - Pool creation and shutdown
//! - Idempotent schema bootstrap
//! - Repository layer for the LightBnB queries

pub mod migrations;
pub mod pool;
pub mod repo;

pub use migrations::run_migrations;
pub use pool::{connect, connect_url, init_db};
pub use repo::{Repository, SeedReport};
