//! Application error types for core storage and domain logic.
use crate::validator::ValidationErrors;
use thiserror::Error;

/// Top-level application error type.
///
/// Storage driver errors only enter this type through
/// [`crate::db::error_map::map_storage_error`]; there is deliberately no
/// `From<rusqlite::Error>` conversion.
#[derive(Error, Debug)]
pub enum AppError {
    /// Lookup target is absent or its visibility window has closed.
    #[error("Not found")]
    NotFound,

    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    #[error("Duplicate email")]
    DuplicateEmail,

    /// Unknown email and wrong password both land here.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password hashing failed: {0}")]
    PasswordHashing(String),

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Database error: {0}")]
    Database(#[source] rusqlite::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Whether the failure is recoverable by re-presenting input to the user.
    ///
    /// # Returns
    /// `true` for not-found, validation, duplicate-email, and credential
    /// failures; `false` for hashing, storage, and internal failures.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::NotFound | Self::Validation(_) | Self::DuplicateEmail | Self::InvalidCredentials
        )
    }
}

#[cfg(test)]
mod tests {
    use super::AppError;
    use crate::validator::Validator;

    #[test]
    fn client_errors_are_recoverable_and_storage_errors_are_not() {
        let mut validator = Validator::default();
        validator.check_field(false, "title", "This field cannot be blank");
        let validation = validator.into_result().expect_err("invalid form");

        for err in [
            AppError::NotFound,
            validation,
            AppError::DuplicateEmail,
            AppError::InvalidCredentials,
        ] {
            assert!(err.is_client_error(), "expected client error: {}", err);
        }

        for err in [
            AppError::PasswordHashing("too long".to_string()),
            AppError::StorageUnavailable("locked".to_string()),
            AppError::Database(rusqlite::Error::InvalidQuery),
            AppError::Internal("overflow".to_string()),
        ] {
            assert!(!err.is_client_error(), "expected fatal error: {}", err);
        }
    }

    #[test]
    fn invalid_credentials_message_is_generic() {
        assert_eq!(AppError::InvalidCredentials.to_string(), "Invalid credentials");
    }
}
