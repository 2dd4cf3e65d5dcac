//! Reservations and the joined rows returned when listing them.

use crate::domain::{Property, PropertyId, ReservationId, UserId};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::postgres::PgRow;
use sqlx::{FromRow, Row};

/// A reservation row as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: ReservationId,
    pub guest_id: UserId,
    pub property_id: PropertyId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl Reservation {
    /// Number of nights covered by the stay.
    pub fn nights(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }
}

/// A guest's reservation joined with the reserved property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReservationListing {
    pub reservation: Reservation,
    pub property: Property,
    /// `None` while the property has no reviews.
    pub average_rating: Option<Decimal>,
}

// Reservation columns are selected under `reservation_id` so that the
// property's own `id` survives the join.
impl<'r> FromRow<'r, PgRow> for ReservationListing {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        let property = Property::from_row(row)?;
        let reservation = Reservation {
            id: row.try_get("reservation_id")?,
            guest_id: row.try_get("guest_id")?,
            property_id: property.id,
            start_date: row.try_get("start_date")?,
            end_date: row.try_get("end_date")?,
        };

        Ok(ReservationListing {
            reservation,
            property,
            average_rating: row.try_get("average_rating")?,
        })
    }
}
