//! Registered users.

use crate::domain::UserId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A user row as stored.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    /// Opaque credential; this layer never inspects it.
    #[serde(skip_serializing)]
    pub password: String,
}

/// Payload for creating a user. The store assigns the id.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl NewUser {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl fmt::Debug for NewUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewUser")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_password() {
        let user = User {
            id: UserId::new(1),
            name: "Devin Sanders".to_string(),
            email: "tristanjacobs@gmail.com".to_string(),
            password: "$2a$10$FB/BOAVhpuLvpOREQVmvmezD4ED/.JBIDRh70tGevYzYzQgFId2u.".to_string(),
        };
        let debug = format!("{:?}", user);
        assert!(debug.contains("tristanjacobs@gmail.com"));
        assert!(!debug.contains("FB/BOAV"));

        let new_user = NewUser::new("a", "b@c.d", "secret");
        assert!(!format!("{:?}", new_user).contains("secret"));
    }

    #[test]
    fn test_serialization_omits_password() {
        let user = User {
            id: UserId::new(3),
            name: "Eva Stanley".to_string(),
            email: "sebastianguerra@ymail.com".to_string(),
            password: "hash".to_string(),
        };
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["id"], 3);
        assert!(json.get("password").is_none());
    }
}
