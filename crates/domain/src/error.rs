//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`HbnbError`]
//! via `#[from]`.

/// Top-level error returned by domain logic and application services.
#[derive(Debug, thiserror::Error)]
pub enum HbnbError {
    /// The request payload was malformed or incomplete.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// A looked-up record (or a record it references) does not exist.
    #[error("record not found")]
    NotFound(#[from] NotFoundError),

    /// The storage backend failed.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Reasons a client payload is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The body is not a non-empty JSON object.
    #[error("Not a JSON")]
    NotJson,

    /// A required key is absent.
    #[error("Missing {0}")]
    MissingField(&'static str),

    /// A known key carries a value of the wrong JSON type.
    #[error("Invalid {field}: expected {expected}")]
    InvalidField {
        field: &'static str,
        expected: &'static str,
    },
}

/// A record of the given kind with the given id does not exist.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_format_validation_messages() {
        assert_eq!(
            ValidationError::MissingField("name").to_string(),
            "Missing name"
        );
        assert_eq!(ValidationError::NotJson.to_string(), "Not a JSON");
    }

    #[test]
    fn should_convert_not_found_into_top_level_error() {
        let err: HbnbError = NotFoundError {
            entity: "State",
            id: "abc".to_string(),
        }
        .into();
        assert!(matches!(err, HbnbError::NotFound(ref inner) if inner.id == "abc"));
    }
}
