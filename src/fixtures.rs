//! Static seed data: users and properties keyed by their fixture ids.
//!
//! The JSON layout is
//!
//! ```json
//! {
//!   "users": { "1": { "name": "...", "email": "...", "password": "..." } },
//!   "properties": { "1": { "owner_id": 1, "city": "...", "cost_per_night": 93061 } }
//! }
//! ```

use crate::domain::{Cents, NewProperty, NewUser, PropertyId, UserId};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("Failed to read fixtures from {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed fixtures: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Property {property} references unknown owner {owner}")]
    UnknownOwner { property: PropertyId, owner: UserId },
    #[error("Property {property} has a negative nightly cost {cost}")]
    NegativeCost { property: PropertyId, cost: Cents },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Fixtures {
    #[serde(default)]
    pub users: BTreeMap<UserId, NewUser>,
    #[serde(default)]
    pub properties: BTreeMap<PropertyId, NewProperty>,
}

impl Fixtures {
    /// Parse fixtures from a JSON document.
    ///
    /// # Errors
    /// Returns an error if the JSON is malformed, a property's owner is
    /// not among the fixture users, or a nightly cost is negative.
    pub fn from_json(json: &str) -> Result<Self, FixtureError> {
        let fixtures: Fixtures = serde_json::from_str(json)?;
        fixtures.check_owners()?;
        fixtures.check_costs()?;
        Ok(fixtures)
    }

    /// Read and parse a fixture file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| FixtureError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    fn check_owners(&self) -> Result<(), FixtureError> {
        match self
            .properties
            .iter()
            .find(|(_, p)| !self.users.contains_key(&p.owner_id))
        {
            Some((id, p)) => Err(FixtureError::UnknownOwner {
                property: *id,
                owner: p.owner_id,
            }),
            None => Ok(()),
        }
    }

    fn check_costs(&self) -> Result<(), FixtureError> {
        match self
            .properties
            .iter()
            .find(|(_, p)| p.cost_per_night.as_i64() < 0)
        {
            Some((id, p)) => Err(FixtureError::NegativeCost {
                property: *id,
                cost: p.cost_per_night,
            }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = r#"{
        "users": {
            "1": { "name": "Devin Sanders", "email": "tristanjacobs@gmail.com", "password": "pw" },
            "2": { "name": "Iva Harrison", "email": "allisonjackson@mail.com", "password": "pw" }
        },
        "properties": {
            "1": { "owner_id": 1, "title": "Speed lamp", "city": "Namsub", "cost_per_night": 93061 },
            "2": { "owner_id": 2, "title": "Blank corner", "city": "Bohbatev", "cost_per_night": 85234 }
        }
    }"#;

    #[test]
    fn test_from_json() {
        let fixtures = Fixtures::from_json(SAMPLE).unwrap();
        assert_eq!(fixtures.users.len(), 2);
        assert_eq!(fixtures.properties.len(), 2);

        let property = &fixtures.properties[&PropertyId::new(2)];
        assert_eq!(property.owner_id, UserId::new(2));
        assert_eq!(property.cost_per_night, Cents::new(85_234));
    }

    #[test]
    fn test_unknown_owner_rejected() {
        let json = r#"{
            "users": {},
            "properties": { "4": { "owner_id": 9, "city": "Nowhere", "cost_per_night": 1 } }
        }"#;
        match Fixtures::from_json(json) {
            Err(FixtureError::UnknownOwner { property, owner }) => {
                assert_eq!(property, PropertyId::new(4));
                assert_eq!(owner, UserId::new(9));
            }
            other => panic!("Expected UnknownOwner, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_cost_rejected() {
        let json = r#"{
            "users": { "1": { "name": "Owner", "email": "owner@example.com", "password": "pw" } },
            "properties": {
                "1": { "owner_id": 1, "city": "Fine", "cost_per_night": 100 },
                "2": { "owner_id": 1, "city": "Broken", "cost_per_night": -5 }
            }
        }"#;
        match Fixtures::from_json(json) {
            Err(FixtureError::NegativeCost { property, cost }) => {
                assert_eq!(property, PropertyId::new(2));
                assert_eq!(cost, Cents::new(-5));
            }
            other => panic!("Expected NegativeCost, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_cost_accepted() {
        let json = r#"{
            "users": { "1": { "name": "Owner", "email": "owner@example.com", "password": "pw" } },
            "properties": { "1": { "owner_id": 1, "city": "Free", "cost_per_night": 0 } }
        }"#;
        let fixtures = Fixtures::from_json(json).unwrap();
        assert_eq!(fixtures.properties[&PropertyId::new(1)].cost_per_night, Cents::new(0));
    }

    #[test]
    fn test_from_path() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let fixtures = Fixtures::from_path(file.path()).unwrap();
        assert_eq!(fixtures.users[&UserId::new(1)].name, "Devin Sanders");
    }

    #[test]
    fn test_bundled_seed_file_parses() {
        let fixtures =
            Fixtures::from_path(concat!(env!("CARGO_MANIFEST_DIR"), "/seeds/fixtures.json"))
                .unwrap();
        assert_eq!(fixtures.users.len(), 3);
        assert_eq!(fixtures.properties.len(), 3);
        assert!(fixtures.properties.values().all(|p| p.active));
    }

    #[test]
    fn test_missing_file() {
        let err = Fixtures::from_path("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, FixtureError::Io { .. }));
    }
}
