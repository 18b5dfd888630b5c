//! Store abstractions consumed by the handler layer.
//!
//! [`crate::db::SnippetDb`] and [`crate::db::UserDb`] are the SQLite
//! implementations; [`memory`] provides in-process doubles with the same
//! semantics for handler tests.

use crate::error::AppError;
use crate::models::snippet::Snippet;

/// In-memory store implementations.
pub mod memory;

/// Creates, fetches, and lists snippets inside their expiry window.
pub trait SnippetStore: Send + Sync {
    /// Persist a snippet that expires `expires_days` days from now.
    ///
    /// The caller is expected to have validated `expires_days`.
    ///
    /// # Returns
    /// The storage-generated identifier.
    ///
    /// # Errors
    /// Returns a storage error when the write fails.
    fn insert(&self, title: &str, content: &str, expires_days: u32) -> Result<i64, AppError>;

    /// Fetch a visible snippet.
    ///
    /// # Errors
    /// Returns [`AppError::NotFound`] when `id` never existed or has expired;
    /// the two cases are indistinguishable.
    fn get(&self, id: i64) -> Result<Snippet, AppError>;

    /// Up to [`crate::LATEST_SNIPPETS_LIMIT`] visible snippets, newest id first.
    ///
    /// # Errors
    /// Returns a storage error when the query fails. An empty list is not an
    /// error.
    fn latest(&self) -> Result<Vec<Snippet>, AppError>;
}

/// Creates and authenticates user credentials.
pub trait UserStore: Send + Sync {
    /// Register a user, storing only a salted hash of `password`.
    ///
    /// # Errors
    /// - [`AppError::DuplicateEmail`] when `email` is already registered.
    /// - [`AppError::PasswordHashing`] when the password cannot be hashed.
    /// - A storage error for any other write failure.
    fn insert(&self, name: &str, email: &str, password: &str) -> Result<(), AppError>;

    /// Resolve credentials to a user id.
    ///
    /// # Errors
    /// Returns [`AppError::InvalidCredentials`] for an unknown email and for a
    /// wrong password alike.
    fn authenticate(&self, email: &str, password: &str) -> Result<i64, AppError>;

    /// Whether a user with `id` exists. Absence is `Ok(false)`, not an error.
    ///
    /// # Errors
    /// Returns a storage error when the query fails.
    fn exists(&self, id: i64) -> Result<bool, AppError>;
}
