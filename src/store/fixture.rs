//! In-memory property store seeded from fixtures.

use super::PropertyStore;
use crate::domain::{NewProperty, NewUser, Property, PropertyId, UserId};
use crate::error::{StoreError, StoreResult};
use crate::fixtures::Fixtures;
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::Mutex;
use tracing::debug;

/// Property store backed by an in-memory map.
///
/// Ids are assigned while holding the lock, one past the highest id in
/// the map, so concurrent adds never share an id.
#[derive(Debug, Default)]
pub struct FixtureStore {
    users: BTreeMap<UserId, NewUser>,
    properties: Mutex<BTreeMap<PropertyId, Property>>,
}

impl FixtureStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the given fixture users and properties.
    pub fn from_fixtures(fixtures: Fixtures) -> Self {
        let properties = fixtures
            .properties
            .into_iter()
            .map(|(id, p)| (id, p.into_property(id)))
            .collect();

        Self {
            users: fixtures.users,
            properties: Mutex::new(properties),
        }
    }

    /// Look up a fixture user.
    pub fn user(&self, id: UserId) -> Option<&NewUser> {
        self.users.get(&id)
    }

    /// Look up a property by id.
    pub async fn property(&self, id: PropertyId) -> Option<Property> {
        self.properties.lock().await.get(&id).cloned()
    }

    /// Snapshot of every property, ordered by id.
    pub async fn properties(&self) -> Vec<Property> {
        self.properties.lock().await.values().cloned().collect()
    }

    pub async fn len(&self) -> usize {
        self.properties.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.properties.lock().await.is_empty()
    }

    /// Remove a property, returning it if it was present.
    pub async fn remove_property(&self, id: PropertyId) -> Option<Property> {
        self.properties.lock().await.remove(&id)
    }
}

#[async_trait]
impl PropertyStore for FixtureStore {
    async fn add_property(&self, property: NewProperty) -> StoreResult<Property> {
        let mut properties = self.properties.lock().await;
        let id = match properties.keys().next_back() {
            Some(highest) => highest.checked_next().ok_or(StoreError::IdsExhausted {
                resource: "property",
            })?,
            None => PropertyId::new(1),
        };

        let property = property.into_property(id);
        properties.insert(id, property.clone());
        debug!(property_id = %id, "Added fixture property");
        Ok(property)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Cents;

    fn new_property(city: &str) -> NewProperty {
        NewProperty::new(UserId::new(1), city, Cents::new(10_000))
    }

    #[tokio::test]
    async fn test_first_id_is_one() {
        let store = FixtureStore::new();
        let property = store.add_property(new_property("Calgary")).await.unwrap();
        assert_eq!(property.id, PropertyId::new(1));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_ids_follow_highest_existing() {
        let fixtures = Fixtures::from_json(
            r#"{
                "users": { "1": { "name": "a", "email": "a@x.io", "password": "p" } },
                "properties": {
                    "1": { "owner_id": 1, "city": "A", "cost_per_night": 1 },
                    "5": { "owner_id": 1, "city": "B", "cost_per_night": 2 }
                }
            }"#,
        )
        .unwrap();
        let store = FixtureStore::from_fixtures(fixtures);

        let property = store.add_property(new_property("C")).await.unwrap();
        assert_eq!(property.id, PropertyId::new(6));
        assert_eq!(store.user(UserId::new(1)).unwrap().email, "a@x.io");
    }

    #[tokio::test]
    async fn test_no_reuse_after_removal() {
        let store = FixtureStore::new();
        let first = store.add_property(new_property("A")).await.unwrap();
        let second = store.add_property(new_property("B")).await.unwrap();

        // a count-based id would hand out 2 again here
        store.remove_property(first.id).await.unwrap();
        let third = store.add_property(new_property("C")).await.unwrap();

        assert_ne!(third.id, second.id);
        assert_eq!(store.property(second.id).await.unwrap().city, "B");
        assert_eq!(store.property(third.id).await.unwrap().city, "C");
    }

    #[tokio::test]
    async fn test_add_after_max_id_is_an_error() {
        let mut fixtures = Fixtures::default();
        fixtures
            .properties
            .insert(PropertyId::new(i64::MAX), new_property("Last"));
        let store = FixtureStore::from_fixtures(fixtures);

        let err = store.add_property(new_property("Overflow")).await.unwrap_err();
        assert!(
            matches!(err, StoreError::IdsExhausted { resource: "property" }),
            "got {:?}",
            err
        );
        assert_eq!(store.len().await, 1);
        assert_eq!(
            store.property(PropertyId::new(i64::MAX)).await.unwrap().city,
            "Last"
        );
    }
}
