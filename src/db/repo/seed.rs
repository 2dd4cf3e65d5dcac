//! Loading fixture data into the store.

use crate::domain::UserId;
use crate::error::StoreResult;
use crate::fixtures::Fixtures;
use std::collections::HashMap;
use tracing::{debug, info};

use super::properties::insert_property_query;
use super::{store_failure, Repository};

/// Counts from a seeding run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub users_inserted: usize,
    pub users_existing: usize,
    pub properties_inserted: usize,
}

impl Repository {
    /// Insert fixture users and their properties.
    ///
    /// Users whose email is already stored are left alone, and so are
    /// their fixture properties. Fixture owner ids are remapped to the ids
    /// the store assigns.
    ///
    /// The whole run is one transaction: a failed insert leaves nothing
    /// behind, so a corrected rerun seeds every user and property.
    ///
    /// # Errors
    /// Returns `StoreError::Database` if an insert fails.
    pub async fn seed(&self, fixtures: &Fixtures) -> StoreResult<SeedReport> {
        let mut report = SeedReport::default();
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| store_failure("seed", e))?;
        let mut stored_ids: HashMap<UserId, UserId> = HashMap::new();

        for (fixture_id, user) in &fixtures.users {
            let inserted: Option<UserId> = sqlx::query_scalar(
                r#"
                INSERT INTO users (name, email, password)
                VALUES ($1, $2, $3)
                ON CONFLICT (email) DO NOTHING
                RETURNING id
                "#,
            )
            .bind(&user.name)
            .bind(&user.email)
            .bind(&user.password)
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| store_failure("seed", e))?;

            match inserted {
                Some(id) => {
                    stored_ids.insert(*fixture_id, id);
                    report.users_inserted += 1;
                }
                None => {
                    debug!(email = %user.email, "Fixture user already stored, skipping");
                    report.users_existing += 1;
                }
            }
        }

        for property in fixtures.properties.values() {
            let Some(owner_id) = stored_ids.get(&property.owner_id) else {
                continue;
            };
            let mut property = property.clone();
            property.owner_id = *owner_id;
            insert_property_query(&property)
                .fetch_one(&mut *tx)
                .await
                .map_err(|e| store_failure("seed", e))?;
            report.properties_inserted += 1;
        }

        tx.commit().await.map_err(|e| store_failure("seed", e))?;

        info!(
            users_inserted = report.users_inserted,
            users_existing = report.users_existing,
            properties_inserted = report.properties_inserted,
            "Seeded fixtures"
        );
        Ok(report)
    }
}
