//! Property search and store-backed creation.

use crate::domain::{Limit, NewProperty, Property, PropertyListing};
use crate::error::{StoreError, StoreResult};
use crate::search::{PropertySearch, SearchQuery};
use crate::store::PropertyStore;
use async_trait::async_trait;
use sqlx::postgres::PgArguments;
use sqlx::query::QueryAs;
use sqlx::Postgres;
use tracing::debug;

use super::{store_failure, Repository};

impl Repository {
    /// Search properties with optional filters, cheapest first.
    ///
    /// Only reviewed properties can match: the average rating comes from an
    /// inner join on reviews. No matches yields an empty vector.
    ///
    /// # Errors
    /// Returns `StoreError::InvalidSearch` for inconsistent options, or
    /// `StoreError::Database` if the query fails.
    pub async fn get_all_properties(
        &self,
        search: &PropertySearch,
        limit: Limit,
    ) -> StoreResult<Vec<PropertyListing>> {
        let query = SearchQuery::new(search, limit)?;
        let mut builder = query.build();
        debug!(sql = builder.sql(), "Searching properties");

        builder
            .build_query_as::<PropertyListing>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| store_failure("get_all_properties", e))
    }

    /// Insert a property row.
    ///
    /// # Errors
    /// Returns `StoreError::NotFound` if the owner does not exist, or
    /// `StoreError::Database` if the insert fails.
    pub async fn insert_property(&self, property: &NewProperty) -> StoreResult<Property> {
        let result = insert_property_query(property).fetch_one(&self.pool).await;

        match result {
            Ok(created) => {
                debug!(property_id = %created.id, owner_id = %created.owner_id, "Created property");
                Ok(created)
            }
            Err(sqlx::Error::Database(db_err)) if db_err.is_foreign_key_violation() => {
                Err(StoreError::not_found("owner", property.owner_id))
            }
            Err(e) => Err(store_failure("insert_property", e)),
        }
    }
}

/// `INSERT … RETURNING *` for one property, runnable on a pool or a transaction.
pub(super) fn insert_property_query(
    property: &NewProperty,
) -> QueryAs<'_, Postgres, Property, PgArguments> {
    sqlx::query_as::<_, Property>(
        r#"
        INSERT INTO properties (
            owner_id, title, description, thumbnail_photo_url, cover_photo_url,
            cost_per_night, parking_spaces, number_of_bathrooms, number_of_bedrooms,
            country, street, city, province, post_code, active
        ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
        RETURNING *
        "#,
    )
    .bind(property.owner_id)
    .bind(&property.title)
    .bind(&property.description)
    .bind(&property.thumbnail_photo_url)
    .bind(&property.cover_photo_url)
    .bind(property.cost_per_night)
    .bind(property.parking_spaces)
    .bind(property.number_of_bathrooms)
    .bind(property.number_of_bedrooms)
    .bind(&property.country)
    .bind(&property.street)
    .bind(&property.city)
    .bind(&property.province)
    .bind(&property.post_code)
    .bind(property.active)
}

#[async_trait]
impl PropertyStore for Repository {
    async fn add_property(&self, property: NewProperty) -> StoreResult<Property> {
        self.insert_property(&property).await
    }
}
