//! Data models for snippets and users.

/// Snippet records.
pub mod snippet;
/// User records.
pub mod user;
