//! Caller-facing property search options.

use crate::domain::{Cents, UserId};
use crate::error::{StoreError, StoreResult};
use crate::search::Predicate;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use std::fmt::Display;
use std::str::FromStr;

/// Filters accepted by property search.
///
/// Prices are in dollars, as a listing form submits them; they are
/// converted to cents before reaching the store. Every field is optional
/// and a blank form value counts as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PropertySearch {
    #[serde(default, deserialize_with = "blank_as_none")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub minimum_price_per_night: Option<Decimal>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub maximum_price_per_night: Option<Decimal>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub owner_id: Option<UserId>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub minimum_rating: Option<Decimal>,
}

impl PropertySearch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn minimum_price_per_night(mut self, dollars: impl Into<Decimal>) -> Self {
        self.minimum_price_per_night = Some(dollars.into());
        self
    }

    pub fn maximum_price_per_night(mut self, dollars: impl Into<Decimal>) -> Self {
        self.maximum_price_per_night = Some(dollars.into());
        self
    }

    pub fn owner_id(mut self, owner_id: UserId) -> Self {
        self.owner_id = Some(owner_id);
        self
    }

    pub fn minimum_rating(mut self, rating: impl Into<Decimal>) -> Self {
        self.minimum_rating = Some(rating.into());
        self
    }

    /// Validate the options and turn them into WHERE predicates.
    ///
    /// Predicates come out in a fixed order: city, minimum price,
    /// maximum price, owner.
    pub fn predicates(&self) -> StoreResult<Vec<Predicate>> {
        let minimum = self
            .minimum_price_per_night
            .map(|d| price_to_cents("minimum_price_per_night", d))
            .transpose()?;
        let maximum = self
            .maximum_price_per_night
            .map(|d| price_to_cents("maximum_price_per_night", d))
            .transpose()?;

        if let (Some(min), Some(max)) = (minimum, maximum) {
            if min > max {
                return Err(StoreError::InvalidSearch(format!(
                    "minimum_price_per_night ({}) exceeds maximum_price_per_night ({})",
                    min, max
                )));
            }
        }

        let mut predicates = Vec::with_capacity(4);
        if let Some(city) = self.city.as_deref().map(str::trim).filter(|c| !c.is_empty()) {
            predicates.push(Predicate::CityContains(city.to_string()));
        }
        if let Some(min) = minimum {
            predicates.push(Predicate::MinCostPerNight(min));
        }
        if let Some(max) = maximum {
            predicates.push(Predicate::MaxCostPerNight(max));
        }
        if let Some(owner_id) = self.owner_id {
            predicates.push(Predicate::Owner(owner_id));
        }
        Ok(predicates)
    }

    /// The HAVING threshold on average rating, if one was requested.
    pub fn rating_threshold(&self) -> StoreResult<Option<Decimal>> {
        match self.minimum_rating {
            Some(rating) if rating < Decimal::ONE || rating > Decimal::from(5) => {
                Err(StoreError::InvalidSearch(format!(
                    "minimum_rating must be between 1 and 5, got {}",
                    rating
                )))
            }
            other => Ok(other),
        }
    }
}

fn price_to_cents(field: &str, dollars: Decimal) -> StoreResult<Cents> {
    if dollars.is_sign_negative() && !dollars.is_zero() {
        return Err(StoreError::InvalidSearch(format!(
            "{} must not be negative, got {}",
            field, dollars
        )));
    }
    Cents::from_dollars(dollars)
        .ok_or_else(|| StoreError::InvalidSearch(format!("{} is out of range", field)))
}

/// A form field arrives either as text or as an already-typed value.
#[derive(Deserialize)]
#[serde(untagged)]
enum FormValue<T> {
    Text(String),
    Value(T),
}

fn blank_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
    T::Err: Display,
{
    match Option::<FormValue<T>>::deserialize(deserializer)? {
        None => Ok(None),
        Some(FormValue::Value(value)) => Ok(Some(value)),
        Some(FormValue::Text(text)) => {
            let text = text.trim();
            if text.is_empty() {
                Ok(None)
            } else {
                text.parse().map(Some).map_err(serde::de::Error::custom)
            }
        }
    }
}
