//! Schema bootstrap.

use sqlx::PgPool;
use tracing::info;

const SCHEMA_SQL: &str = include_str!("schema.sql");

/// Create the LightBnB tables and indexes if they do not exist yet.
///
/// Every statement is `IF NOT EXISTS`, so this is safe to run on each start.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::Error> {
    info!("Running database migrations...");

    for statement in schema_statements() {
        sqlx::query(statement).execute(pool).await?;
    }

    info!("Migrations completed successfully");
    Ok(())
}

fn schema_statements() -> impl Iterator<Item = &'static str> {
    SCHEMA_SQL
        .split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_statements_are_idempotent() {
        let statements: Vec<_> = schema_statements().collect();
        assert_eq!(statements.len(), 7);
        for statement in statements {
            assert!(
                statement.contains("IF NOT EXISTS"),
                "non-idempotent statement: {}",
                statement
            );
        }
    }

    #[test]
    fn test_tables_created_in_dependency_order() {
        let tables: Vec<_> = schema_statements()
            .filter_map(|s| s.strip_prefix("CREATE TABLE IF NOT EXISTS "))
            .filter_map(|s| s.split_whitespace().next())
            .collect();
        assert_eq!(
            tables,
            vec!["users", "properties", "reservations", "property_reviews"]
        );
    }
}
