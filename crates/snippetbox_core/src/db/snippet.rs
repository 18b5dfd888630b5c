//! Snippet storage operations backed by SQLite.

use super::time_util::{expiry_after, timestamp_column, to_millis, truncate_to_millis};
use super::{with_connection, SharedClock, SharedConnection};
use crate::constants::LATEST_SNIPPETS_LIMIT;
use crate::error::AppError;
use crate::models::snippet::Snippet;
use crate::store::SnippetStore;
use rusqlite::{params, OptionalExtension, Row};

const SNIPPET_COLUMNS: &str = "id, title, content, created, expires";

/// Accessor for the `snippets` table.
#[derive(Clone)]
pub struct SnippetDb {
    conn: SharedConnection,
    clock: SharedClock,
}

impl SnippetDb {
    pub(crate) fn new(conn: SharedConnection, clock: SharedClock) -> Self {
        Self { conn, clock }
    }

    /// Count snippets whose expiry window is still open.
    ///
    /// # Errors
    /// Returns a mapped storage error if the query fails.
    pub fn count_visible(&self) -> Result<u64, AppError> {
        let now = to_millis(self.clock.utc());
        with_connection(&self.conn, |conn| {
            conn.query_row(
                "SELECT COUNT(*) FROM snippets WHERE expires > ?1",
                params![now],
                |row| row.get::<_, i64>(0),
            )
        })
        .map(|count| u64::try_from(count).unwrap_or(0))
    }
}

fn snippet_from_row(row: &Row<'_>) -> rusqlite::Result<Snippet> {
    Ok(Snippet {
        id: row.get(0)?,
        title: row.get(1)?,
        content: row.get(2)?,
        created: timestamp_column(row, 3)?,
        expires: timestamp_column(row, 4)?,
    })
}

impl SnippetStore for SnippetDb {
    fn insert(&self, title: &str, content: &str, expires_days: u32) -> Result<i64, AppError> {
        let created = truncate_to_millis(self.clock.utc());
        let expires = expiry_after(created, expires_days)?;
        with_connection(&self.conn, |conn| {
            conn.query_row(
                "INSERT INTO snippets (title, content, created, expires)
                 VALUES (?1, ?2, ?3, ?4)
                 RETURNING id",
                params![title, content, to_millis(created), to_millis(expires)],
                |row| row.get(0),
            )
        })
    }

    fn get(&self, id: i64) -> Result<Snippet, AppError> {
        let now = to_millis(self.clock.utc());
        let sql = format!(
            "SELECT {} FROM snippets WHERE expires > ?1 AND id = ?2",
            SNIPPET_COLUMNS
        );
        with_connection(&self.conn, |conn| {
            conn.query_row(&sql, params![now, id], snippet_from_row)
                .optional()
        })?
        .ok_or(AppError::NotFound)
    }

    fn latest(&self) -> Result<Vec<Snippet>, AppError> {
        let now = to_millis(self.clock.utc());
        let sql = format!(
            "SELECT {} FROM snippets WHERE expires > ?1 ORDER BY id DESC LIMIT ?2",
            SNIPPET_COLUMNS
        );
        let limit = i64::try_from(LATEST_SNIPPETS_LIMIT).unwrap_or(i64::MAX);
        with_connection(&self.conn, |conn| {
            let mut stmt = conn.prepare_cached(&sql)?;
            let rows = stmt.query_map(params![now, limit], snippet_from_row)?;
            let snippets = rows.collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(snippets)
        })
    }
}
