//! Domain primitives: UserId, PropertyId, ReservationId, Limit.

use serde::{Deserialize, Serialize};

/// Primary key of a row in `users`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, sqlx::Type,
)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct UserId(pub i64);

impl UserId {
    /// Create a UserId from a raw key.
    pub fn new(id: i64) -> Self {
        UserId(id)
    }

    /// Get the underlying key.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for UserId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(UserId)
    }
}

/// Primary key of a row in `properties`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, sqlx::Type,
)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct PropertyId(pub i64);

impl PropertyId {
    /// Create a PropertyId from a raw key.
    pub fn new(id: i64) -> Self {
        PropertyId(id)
    }

    /// Get the underlying key.
    pub fn as_i64(&self) -> i64 {
        self.0
    }

    /// The key that follows this one, or `None` past `i64::MAX`.
    pub fn checked_next(&self) -> Option<Self> {
        self.0.checked_add(1).map(PropertyId)
    }
}

impl std::fmt::Display for PropertyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Primary key of a row in `reservations`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, sqlx::Type,
)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct ReservationId(pub i64);

impl std::fmt::Display for ReservationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Maximum number of rows a listing query may return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Limit(u32);

impl Limit {
    /// Rows returned when the caller does not ask for a specific amount.
    pub const DEFAULT: Limit = Limit(10);
    /// Upper bound accepted by [`Limit::new`].
    pub const MAX: u32 = 1000;

    /// Create a Limit, rejecting zero and anything above [`Limit::MAX`].
    pub fn new(rows: u32) -> Option<Self> {
        (1..=Self::MAX).contains(&rows).then_some(Limit(rows))
    }

    /// Get the limit as a count of rows.
    pub fn get(&self) -> u32 {
        self.0
    }

    /// Get the limit in the form bound into a `LIMIT` clause.
    pub fn as_i64(&self) -> i64 {
        i64::from(self.0)
    }
}

impl Default for Limit {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl<'de> Deserialize<'de> for Limit {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let rows = u32::deserialize(deserializer)?;
        Limit::new(rows).ok_or_else(|| {
            serde::de::Error::custom(format!("limit must be between 1 and {}", Limit::MAX))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_default_is_ten() {
        assert_eq!(Limit::default().get(), 10);
    }

    #[test]
    fn test_limit_bounds() {
        assert!(Limit::new(0).is_none());
        assert!(Limit::new(Limit::MAX + 1).is_none());
        assert_eq!(Limit::new(1).unwrap().as_i64(), 1);
        assert_eq!(Limit::new(Limit::MAX).unwrap().get(), Limit::MAX);
    }

    #[test]
    fn test_limit_deserialization_rejects_zero() {
        let err = serde_json::from_str::<Limit>("0").unwrap_err();
        assert!(err.to_string().contains("between 1 and 1000"));

        let limit: Limit = serde_json::from_str("25").unwrap();
        assert_eq!(limit.get(), 25);
    }

    #[test]
    fn test_ids_serialize_as_plain_numbers() {
        let json = serde_json::to_string(&UserId::new(7)).unwrap();
        assert_eq!(json, "7");

        let id: PropertyId = serde_json::from_str("12").unwrap();
        assert_eq!(id, PropertyId::new(12));
        assert_eq!(id.checked_next(), Some(PropertyId::new(13)));
        assert_eq!(PropertyId::new(i64::MAX).checked_next(), None);
    }
}
