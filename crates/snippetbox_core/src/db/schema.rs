//! Relational schema applied when a database is opened.

/// Idempotent DDL for the snippet and user tables.
pub(crate) const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS snippets (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    content TEXT NOT NULL,
    created INTEGER NOT NULL,
    expires INTEGER NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_snippets_expires ON snippets(expires);

CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    email TEXT NOT NULL,
    hashed_password BLOB NOT NULL,
    created INTEGER NOT NULL,
    CONSTRAINT users_uc_email UNIQUE (email)
);
";
