//! Integer money amounts in the smallest currency unit.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// An amount in cents.
///
/// Nightly costs are stored and filtered as whole cents; dollar amounts
/// only appear at the edges (search options, display).
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    sqlx::Type,
)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct Cents(pub i64);

impl Cents {
    /// Create an amount from a count of cents.
    pub fn new(cents: i64) -> Self {
        Cents(cents)
    }

    /// Convert a dollar amount to cents, rounding half away from zero.
    ///
    /// Returns `None` when the result does not fit in an `i64`.
    pub fn from_dollars(dollars: Decimal) -> Option<Self> {
        let cents = dollars
            .checked_mul(Decimal::ONE_HUNDRED)?
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        cents.to_i64().map(Cents)
    }

    /// Get the underlying count of cents.
    pub fn as_i64(&self) -> i64 {
        self.0
    }

    /// The amount expressed in dollars.
    pub fn to_dollars(&self) -> Decimal {
        Decimal::new(self.0, 2)
    }
}

impl std::fmt::Display for Cents {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "${}", self.to_dollars())
    }
}
