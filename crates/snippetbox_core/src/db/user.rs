//! User credential storage backed by SQLite.

use super::time_util::{timestamp_column, to_millis, truncate_to_millis};
use super::{with_connection, SharedClock, SharedConnection};
use crate::error::AppError;
use crate::models::user::User;
use crate::password::PasswordHasher;
use crate::store::UserStore;
use rusqlite::{params, OptionalExtension};
use std::sync::Arc;

/// Accessor for the `users` table.
#[derive(Clone)]
pub struct UserDb {
    conn: SharedConnection,
    clock: SharedClock,
    hasher: Arc<PasswordHasher>,
}

impl UserDb {
    pub(crate) fn new(
        conn: SharedConnection,
        clock: SharedClock,
        hasher: Arc<PasswordHasher>,
    ) -> Self {
        Self {
            conn,
            clock,
            hasher,
        }
    }

    /// Fetch a user's profile by id.
    ///
    /// # Errors
    /// Returns [`AppError::NotFound`] when no such user exists, or a mapped
    /// storage error if the query fails.
    pub fn get(&self, id: i64) -> Result<User, AppError> {
        with_connection(&self.conn, |conn| {
            conn.query_row(
                "SELECT id, name, email, hashed_password, created FROM users WHERE id = ?1",
                params![id],
                |row| {
                    Ok(User {
                        id: row.get(0)?,
                        name: row.get(1)?,
                        email: row.get(2)?,
                        hashed_password: row.get(3)?,
                        created: timestamp_column(row, 4)?,
                    })
                },
            )
            .optional()
        })?
        .ok_or(AppError::NotFound)
    }
}

impl UserStore for UserDb {
    fn insert(&self, name: &str, email: &str, password: &str) -> Result<(), AppError> {
        // Hash before taking the connection lock; argon2 is slow on purpose.
        let hashed_password = self.hasher.hash(password)?;
        let created = truncate_to_millis(self.clock.utc());
        with_connection(&self.conn, |conn| {
            conn.execute(
                "INSERT INTO users (name, email, hashed_password, created)
                 VALUES (?1, ?2, ?3, ?4)",
                params![name, email, hashed_password, to_millis(created)],
            )
        })?;
        Ok(())
    }

    fn authenticate(&self, email: &str, password: &str) -> Result<i64, AppError> {
        let stored = with_connection(&self.conn, |conn| {
            conn.query_row(
                "SELECT id, hashed_password FROM users WHERE email = ?1",
                params![email],
                |row| Ok((row.get::<_, i64>(0)?, row.get::<_, Vec<u8>>(1)?)),
            )
            .optional()
        })?;

        let Some((id, hashed_password)) = stored else {
            self.hasher.verify_dummy(password);
            return Err(AppError::InvalidCredentials);
        };

        if self.hasher.verify(password, &hashed_password)? {
            Ok(id)
        } else {
            Err(AppError::InvalidCredentials)
        }
    }

    fn exists(&self, id: i64) -> Result<bool, AppError> {
        with_connection(&self.conn, |conn| {
            conn.query_row(
                "SELECT EXISTS(SELECT 1 FROM users WHERE id = ?1)",
                params![id],
                |row| row.get(0),
            )
        })
    }
}
