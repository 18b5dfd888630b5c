//! Shared database time conversion helpers.
//!
//! Timestamps are persisted as integer Unix milliseconds.

use crate::error::AppError;
use chrono::{DateTime, TimeDelta, Utc};
use rusqlite::Row;

/// Drop sub-millisecond precision so values survive a storage round trip.
pub(super) fn truncate_to_millis(ts: DateTime<Utc>) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(ts.timestamp_millis()).unwrap_or(ts)
}

pub(super) fn to_millis(ts: DateTime<Utc>) -> i64 {
    ts.timestamp_millis()
}

/// Read a millisecond timestamp column.
pub(super) fn timestamp_column(row: &Row<'_>, idx: usize) -> rusqlite::Result<DateTime<Utc>> {
    let millis: i64 = row.get(idx)?;
    DateTime::from_timestamp_millis(millis)
        .ok_or(rusqlite::Error::IntegralValueOutOfRange(idx, millis))
}

/// Compute `created + days`.
///
/// # Errors
/// Returns [`AppError::Internal`] when the result leaves chrono's range.
pub(super) fn expiry_after(created: DateTime<Utc>, days: u32) -> Result<DateTime<Utc>, AppError> {
    TimeDelta::try_days(i64::from(days))
        .and_then(|delta| created.checked_add_signed(delta))
        .ok_or_else(|| AppError::Internal(format!("expiry of {} days is out of range", days)))
}
