use thiserror::Error;

/// Outcome of a failed data-access call.
///
/// `NotFound` is an expected result; `Database` means the store could not
/// answer at all.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Not found: {resource} {key}")]
    NotFound { resource: &'static str, key: String },
    #[error("A user with email {0} already exists")]
    DuplicateEmail(String),
    #[error("Invalid search: {0}")]
    InvalidSearch(String),
    #[error("No {resource} ids left to assign")]
    IdsExhausted { resource: &'static str },
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl StoreError {
    pub fn not_found(resource: &'static str, key: impl ToString) -> Self {
        StoreError::NotFound {
            resource,
            key: key.to_string(),
        }
    }

    /// True for the "zero rows" outcome, false for every failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_is_distinct_from_database_error() {
        let err = StoreError::not_found("user", "nobody@example.com");
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Not found: user nobody@example.com");

        let err = StoreError::from(sqlx::Error::PoolTimedOut);
        assert!(!err.is_not_found());
        assert!(err.to_string().starts_with("Database error:"));
    }

    #[test]
    fn test_ids_exhausted_display() {
        let err = StoreError::IdsExhausted {
            resource: "property",
        };
        assert!(!err.is_not_found());
        assert_eq!(err.to_string(), "No property ids left to assign");
    }

    #[test]
    fn test_duplicate_email_display() {
        let err = StoreError::DuplicateEmail("a@b.c".to_string());
        assert_eq!(err.to_string(), "A user with email a@b.c already exists");
    }
}
