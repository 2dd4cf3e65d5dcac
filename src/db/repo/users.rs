//! User lookup and creation.

use crate::domain::{NewUser, User, UserId};
use crate::error::{StoreError, StoreResult};
use tracing::{debug, warn};

use super::{store_failure, Repository};

impl Repository {
    /// Get a single user by exact email.
    ///
    /// # Errors
    /// Returns `StoreError::NotFound` if no user has this email, or
    /// `StoreError::Database` if the query fails.
    pub async fn get_user_with_email(&self, email: &str) -> StoreResult<User> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, name, email, password FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| store_failure("get_user_with_email", e))?;

        user.ok_or_else(|| StoreError::not_found("user", email))
    }

    /// Get a single user by id.
    ///
    /// # Errors
    /// Returns `StoreError::NotFound` if no user has this id, or
    /// `StoreError::Database` if the query fails.
    pub async fn get_user_with_id(&self, id: UserId) -> StoreResult<User> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, name, email, password FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| store_failure("get_user_with_id", e))?;

        user.ok_or_else(|| StoreError::not_found("user", id))
    }

    /// Insert a user and return the stored row, including its new id.
    ///
    /// Email uniqueness is left to the store's constraint.
    ///
    /// # Errors
    /// Returns `StoreError::DuplicateEmail` if the email is taken, or
    /// `StoreError::Database` if the insert fails for any other reason.
    pub async fn add_user(&self, user: &NewUser) -> StoreResult<User> {
        let result = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email, password)
            VALUES ($1, $2, $3)
            RETURNING id, name, email, password
            "#,
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password)
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(created) => {
                debug!(user_id = %created.id, "Created user");
                Ok(created)
            }
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                warn!(email = %user.email, "Rejected user with duplicate email");
                Err(StoreError::DuplicateEmail(user.email.clone()))
            }
            Err(e) => Err(store_failure("add_user", e)),
        }
    }
}
