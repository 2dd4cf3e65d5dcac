//! SQL assembly for property search.

use crate::domain::{Cents, Limit, UserId};
use crate::error::StoreResult;
use crate::search::PropertySearch;
use rust_decimal::Decimal;
use sqlx::{Postgres, QueryBuilder};

const BASE_SELECT: &str = "SELECT properties.*, avg(property_reviews.rating) AS average_rating \
     FROM properties \
     JOIN property_reviews ON properties.id = property_reviews.property_id";

/// One WHERE condition on the `properties` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// Case-insensitive substring match on city.
    CityContains(String),
    MinCostPerNight(Cents),
    MaxCostPerNight(Cents),
    Owner(UserId),
}

impl Predicate {
    fn push_to(&self, query: &mut QueryBuilder<'static, Postgres>) {
        match self {
            Predicate::CityContains(city) => {
                query.push("properties.city ILIKE ");
                query.push_bind(format!("%{}%", escape_like(city)));
            }
            Predicate::MinCostPerNight(cents) => {
                query.push("properties.cost_per_night >= ");
                query.push_bind(*cents);
            }
            Predicate::MaxCostPerNight(cents) => {
                query.push("properties.cost_per_night <= ");
                query.push_bind(*cents);
            }
            Predicate::Owner(owner_id) => {
                query.push("properties.owner_id = ");
                query.push_bind(*owner_id);
            }
        }
    }
}

/// A validated property search, ready to render.
///
/// `WHERE` and `AND` placement is derived from the predicate list, so any
/// subset of filters renders to valid SQL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    predicates: Vec<Predicate>,
    minimum_rating: Option<Decimal>,
    limit: Limit,
}

impl SearchQuery {
    /// Validate search options.
    ///
    /// # Errors
    /// Returns `StoreError::InvalidSearch` if the options are inconsistent.
    pub fn new(search: &PropertySearch, limit: Limit) -> StoreResult<Self> {
        Ok(SearchQuery {
            predicates: search.predicates()?,
            minimum_rating: search.rating_threshold()?,
            limit,
        })
    }

    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    /// Render the statement with its bound parameters.
    pub fn build(&self) -> QueryBuilder<'static, Postgres> {
        let mut query = QueryBuilder::new(BASE_SELECT);

        for (i, predicate) in self.predicates.iter().enumerate() {
            query.push(if i == 0 { " WHERE " } else { " AND " });
            predicate.push_to(&mut query);
        }

        query.push(" GROUP BY properties.id");

        if let Some(rating) = self.minimum_rating {
            query.push(" HAVING avg(property_reviews.rating) >= ");
            query.push_bind(rating);
        }

        // cost ties broken by id so pages are stable
        query.push(" ORDER BY properties.cost_per_night ASC, properties.id ASC LIMIT ");
        query.push_bind(self.limit.as_i64());

        query
    }

    /// The rendered SQL text.
    pub fn sql(&self) -> String {
        self.build().sql().to_string()
    }
}

/// Escape LIKE metacharacters so user input matches literally.
fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
