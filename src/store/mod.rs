//! Property persistence abstraction.

use crate::domain::{NewProperty, Property};
use crate::error::StoreResult;
use async_trait::async_trait;
use std::fmt;

pub mod fixture;

pub use fixture::FixtureStore;

/// Anything that can persist a new property and assign its id.
///
/// `Repository` writes to the database. `FixtureStore` keeps seed data in
/// memory and is meant for tests and local demos only; properties added
/// there are not visible to the store-backed search.
#[async_trait]
pub trait PropertyStore: Send + Sync + fmt::Debug {
    /// Persist a property and return it with its assigned id.
    async fn add_property(&self, property: NewProperty) -> StoreResult<Property>;
}
