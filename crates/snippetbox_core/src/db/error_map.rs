//! Translation of SQLite driver failures into [`AppError`] values.

use crate::constants::USERS_EMAIL_COLUMN;
use crate::error::AppError;
use rusqlite::ffi;
use rusqlite::ErrorCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StorageFailure {
    DuplicateEmail,
    Unavailable,
    Other,
}

/// Map a driver error onto the domain taxonomy.
///
/// Unique violations on `users.email` become [`AppError::DuplicateEmail`];
/// lock, open, and I/O failures become [`AppError::StorageUnavailable`].
/// Everything else passes through unchanged as [`AppError::Database`].
pub fn map_storage_error(err: rusqlite::Error) -> AppError {
    let failure = match &err {
        rusqlite::Error::SqliteFailure(code, message) => classify(code, message.as_deref()),
        _ => StorageFailure::Other,
    };
    match failure {
        StorageFailure::DuplicateEmail => AppError::DuplicateEmail,
        StorageFailure::Unavailable => AppError::StorageUnavailable(err.to_string()),
        StorageFailure::Other => AppError::Database(err),
    }
}

fn classify(code: &ffi::Error, message: Option<&str>) -> StorageFailure {
    if code.extended_code == ffi::SQLITE_CONSTRAINT_UNIQUE
        && message.is_some_and(names_users_email)
    {
        return StorageFailure::DuplicateEmail;
    }
    match code.code {
        ErrorCode::DatabaseBusy
        | ErrorCode::DatabaseLocked
        | ErrorCode::CannotOpen
        | ErrorCode::NotADatabase
        | ErrorCode::SystemIoFailure
        | ErrorCode::DiskFull => StorageFailure::Unavailable,
        _ => StorageFailure::Other,
    }
}

// SQLite reports the offending columns ("UNIQUE constraint failed: users.email").
fn names_users_email(message: &str) -> bool {
    message
        .rsplit(':')
        .next()
        .is_some_and(|columns| columns.split(',').any(|col| col.trim() == USERS_EMAIL_COLUMN))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sqlite_failure(extended_code: i32, message: &str) -> rusqlite::Error {
        rusqlite::Error::SqliteFailure(ffi::Error::new(extended_code), Some(message.to_string()))
    }

    #[test]
    fn unique_email_violation_maps_to_duplicate_email() {
        let err = sqlite_failure(
            ffi::SQLITE_CONSTRAINT_UNIQUE,
            "UNIQUE constraint failed: users.email",
        );
        assert!(matches!(map_storage_error(err), AppError::DuplicateEmail));
    }

    #[test]
    fn unique_violation_on_other_column_passes_through() {
        let err = sqlite_failure(
            ffi::SQLITE_CONSTRAINT_UNIQUE,
            "UNIQUE constraint failed: users.name",
        );
        assert!(matches!(map_storage_error(err), AppError::Database(_)));
    }

    #[test]
    fn other_constraint_kinds_pass_through() {
        let err = sqlite_failure(
            ffi::SQLITE_CONSTRAINT_NOTNULL,
            "NOT NULL constraint failed: users.email",
        );
        assert!(matches!(map_storage_error(err), AppError::Database(_)));
    }

    #[test]
    fn busy_and_locked_map_to_unavailable() {
        for code in [ffi::SQLITE_BUSY, ffi::SQLITE_LOCKED, ffi::SQLITE_CANTOPEN] {
            let err = sqlite_failure(code, "database is locked");
            assert!(
                matches!(map_storage_error(err), AppError::StorageUnavailable(_)),
                "code {} should be unavailable",
                code
            );
        }
    }

    #[test]
    fn non_sqlite_failures_pass_through() {
        assert!(matches!(
            map_storage_error(rusqlite::Error::QueryReturnedNoRows),
            AppError::Database(rusqlite::Error::QueryReturnedNoRows)
        ));
    }
}
