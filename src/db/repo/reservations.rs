//! Reservation listing.

use crate::domain::{Limit, ReservationListing, UserId};
use crate::error::{StoreError, StoreResult};

use super::{store_failure, Repository};

impl Repository {
    /// Get up to `limit` reservations for a guest, each joined with the
    /// reserved property and its average rating.
    ///
    /// Ordered by stay start date, then reservation id.
    ///
    /// # Errors
    /// Returns `StoreError::NotFound` if the guest has no reservations, or
    /// `StoreError::Database` if the query fails.
    pub async fn get_all_reservations(
        &self,
        guest_id: UserId,
        limit: Limit,
    ) -> StoreResult<Vec<ReservationListing>> {
        let reservations = sqlx::query_as::<_, ReservationListing>(
            r#"
            SELECT reservations.id AS reservation_id,
                   reservations.guest_id,
                   reservations.start_date,
                   reservations.end_date,
                   properties.*,
                   avg(property_reviews.rating) AS average_rating
            FROM reservations
            JOIN properties ON reservations.property_id = properties.id
            LEFT JOIN property_reviews ON properties.id = property_reviews.property_id
            WHERE reservations.guest_id = $1
            GROUP BY reservations.id, properties.id
            ORDER BY reservations.start_date ASC, reservations.id ASC
            LIMIT $2
            "#,
        )
        .bind(guest_id)
        .bind(limit.as_i64())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| store_failure("get_all_reservations", e))?;

        if reservations.is_empty() {
            return Err(StoreError::not_found("reservations for guest", guest_id));
        }
        Ok(reservations)
    }
}
