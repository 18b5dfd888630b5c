//! SQLite-backed storage for snippets and users.

/// Driver error translation.
pub mod error_map;
/// Schema DDL.
pub mod schema;
/// Snippet storage.
pub mod snippet;
/// User credential storage.
pub mod user;

mod time_util;

use crate::config::Config;
use crate::error::AppError;
use crate::password::PasswordHasher;
use mockable::{Clock, DefaultClock};
use rusqlite::Connection;
use std::sync::{Arc, Mutex};

pub use error_map::map_storage_error;
pub use snippet::SnippetDb;
pub use user::UserDb;

/// Connection shared by every store created from one [`Database`].
pub(crate) type SharedConnection = Arc<Mutex<Connection>>;
/// Time source shared by the stores.
pub type SharedClock = Arc<dyn Clock + Send + Sync>;

/// Run `op` against the shared connection, mapping driver failures.
///
/// Each store operation is a single statement executed while the lock is
/// held, so statements never interleave on the connection.
pub(crate) fn with_connection<T, F>(conn: &SharedConnection, op: F) -> Result<T, AppError>
where
    F: FnOnce(&Connection) -> rusqlite::Result<T>,
{
    let guard = conn
        .lock()
        .map_err(|_| AppError::StorageUnavailable("database connection lock poisoned".to_string()))?;
    op(&guard).map_err(map_storage_error)
}

/// Database handle exposing the snippet and user stores.
#[derive(Clone)]
pub struct Database {
    conn: SharedConnection,
    pub snippets: SnippetDb,
    pub users: UserDb,
}

#[cfg(test)]
mod tests;

impl Database {
    /// Open (or create) a file-backed database with default settings.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or the schema fails.
    pub fn new(path: &str) -> Result<Self, AppError> {
        let config = Config {
            db_path: path.to_string(),
            busy_timeout_ms: crate::constants::DEFAULT_BUSY_TIMEOUT_MS,
            wal: true,
        };
        Self::open(&config)
    }

    /// Open the database described by `config` using the system clock.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or the schema fails.
    pub fn open(config: &Config) -> Result<Self, AppError> {
        Self::open_with_clock(config, Arc::new(DefaultClock))
    }

    /// Open the database described by `config` with an explicit clock.
    ///
    /// # Errors
    /// Returns [`AppError::StorageUnavailable`] when the file cannot be
    /// opened, or a mapped driver error if pragmas or schema setup fail.
    pub fn open_with_clock(config: &Config, clock: SharedClock) -> Result<Self, AppError> {
        if let Some(parent) = std::path::Path::new(&config.db_path).parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|err| {
                    AppError::StorageUnavailable(format!(
                        "cannot create database directory {}: {}",
                        parent.display(),
                        err
                    ))
                })?;
            }
        }

        let conn = Connection::open(&config.db_path).map_err(map_storage_error)?;
        conn.busy_timeout(config.busy_timeout())
            .map_err(map_storage_error)?;
        if config.wal {
            let mode: String = conn
                .pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get(0))
                .map_err(map_storage_error)?;
            tracing::debug!("journal_mode={}", mode);
        }

        tracing::info!("Opened database at {}", config.db_path);
        Self::from_connection(conn, clock)
    }

    /// Open a private in-memory database using the system clock.
    ///
    /// # Errors
    /// Returns an error if the schema cannot be applied.
    pub fn in_memory() -> Result<Self, AppError> {
        Self::in_memory_with_clock(Arc::new(DefaultClock))
    }

    /// Open a private in-memory database with an explicit clock.
    ///
    /// # Errors
    /// Returns an error if the schema cannot be applied.
    pub fn in_memory_with_clock(clock: SharedClock) -> Result<Self, AppError> {
        let conn = Connection::open_in_memory().map_err(map_storage_error)?;
        Self::from_connection(conn, clock)
    }

    fn from_connection(conn: Connection, clock: SharedClock) -> Result<Self, AppError> {
        conn.execute_batch(schema::SCHEMA)
            .map_err(map_storage_error)?;
        tracing::debug!("Database schema applied");

        let conn = Arc::new(Mutex::new(conn));
        let hasher = Arc::new(PasswordHasher::new()?);
        Ok(Self {
            snippets: SnippetDb::new(conn.clone(), clock.clone()),
            users: UserDb::new(conn.clone(), clock, hasher),
            conn,
        })
    }

    /// Clone this handle for another subsystem in the same process.
    ///
    /// The returned handle shares the connection, clock, and hasher.
    pub fn share(&self) -> Self {
        self.clone()
    }

    /// Whether two handles refer to the same underlying connection.
    pub fn shares_connection_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.conn, &other.conn)
    }
}
