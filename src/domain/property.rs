//! Rental properties and search result rows.

use crate::domain::{Cents, PropertyId, UserId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A property row as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Property {
    pub id: PropertyId,
    pub owner_id: UserId,
    pub title: String,
    pub description: String,
    pub thumbnail_photo_url: String,
    pub cover_photo_url: String,
    pub cost_per_night: Cents,
    pub parking_spaces: i32,
    pub number_of_bathrooms: i32,
    pub number_of_bedrooms: i32,
    pub country: String,
    pub street: String,
    pub city: String,
    pub province: String,
    pub post_code: String,
    pub active: bool,
}

/// Payload for creating a property. Descriptive fields default to empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProperty {
    pub owner_id: UserId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub thumbnail_photo_url: String,
    #[serde(default)]
    pub cover_photo_url: String,
    pub cost_per_night: Cents,
    #[serde(default)]
    pub parking_spaces: i32,
    #[serde(default)]
    pub number_of_bathrooms: i32,
    #[serde(default)]
    pub number_of_bedrooms: i32,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub street: String,
    pub city: String,
    #[serde(default)]
    pub province: String,
    #[serde(default)]
    pub post_code: String,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl NewProperty {
    /// Minimal payload: owner, city and nightly cost.
    pub fn new(owner_id: UserId, city: impl Into<String>, cost_per_night: Cents) -> Self {
        Self {
            owner_id,
            title: String::new(),
            description: String::new(),
            thumbnail_photo_url: String::new(),
            cover_photo_url: String::new(),
            cost_per_night,
            parking_spaces: 0,
            number_of_bathrooms: 0,
            number_of_bedrooms: 0,
            country: String::new(),
            street: String::new(),
            city: city.into(),
            province: String::new(),
            post_code: String::new(),
            active: true,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Attach an id, producing the stored form.
    pub fn into_property(self, id: PropertyId) -> Property {
        Property {
            id,
            owner_id: self.owner_id,
            title: self.title,
            description: self.description,
            thumbnail_photo_url: self.thumbnail_photo_url,
            cover_photo_url: self.cover_photo_url,
            cost_per_night: self.cost_per_night,
            parking_spaces: self.parking_spaces,
            number_of_bathrooms: self.number_of_bathrooms,
            number_of_bedrooms: self.number_of_bedrooms,
            country: self.country,
            street: self.street,
            city: self.city,
            province: self.province,
            post_code: self.post_code,
            active: self.active,
        }
    }
}

/// A property search hit with its average review rating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct PropertyListing {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub property: Property,
    pub average_rating: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_property_defaults_from_json() {
        let payload: NewProperty = serde_json::from_value(json!({
            "owner_id": 4,
            "cost_per_night": 93061,
            "city": "Vancouver"
        }))
        .unwrap();

        assert_eq!(payload.owner_id, UserId::new(4));
        assert_eq!(payload.cost_per_night, Cents::new(93_061));
        assert!(payload.active);
        assert!(payload.title.is_empty());
    }

    #[test]
    fn test_into_property_keeps_fields() {
        let property = NewProperty::new(UserId::new(2), "Namsub", Cents::new(8_500))
            .with_title("Speed lamp")
            .into_property(PropertyId::new(9));

        assert_eq!(property.id, PropertyId::new(9));
        assert_eq!(property.title, "Speed lamp");
        assert_eq!(property.city, "Namsub");
    }

    #[test]
    fn test_listing_serializes_flat() {
        let listing = PropertyListing {
            property: NewProperty::new(UserId::new(1), "Calgary", Cents::new(100))
                .into_property(PropertyId::new(5)),
            average_rating: Decimal::new(45, 1),
        };
        let json = serde_json::to_value(&listing).unwrap();
        assert_eq!(json["id"], 5);
        assert_eq!(json["city"], "Calgary");
        assert!(json.get("property").is_none());
    }
}
