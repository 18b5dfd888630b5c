//! Core domain library for Snippetbox (storage, identity, validation).

/// Configuration loading and defaults.
pub mod config;
/// Shared constants.
pub mod constants;
/// Relational storage layer.
pub mod db;
/// Application error types (storage/domain).
pub mod error;
/// Typed form payloads and their validation rules.
pub mod forms;
/// Data models returned by the stores.
pub mod models;
/// Password hashing and verification.
pub mod password;
/// Store abstractions and in-memory doubles.
pub mod store;
/// Field validation helpers.
pub mod validator;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::Config;
pub use constants::LATEST_SNIPPETS_LIMIT;
pub use db::Database;
pub use error::AppError;
pub use models::{snippet::Snippet, user::User};
pub use password::PasswordHasher;
pub use store::{SnippetStore, UserStore};
pub use validator::{ValidationErrors, Validator};
