//! Shared test-only helpers for snippetbox_core.

use crate::config::Config;
use crate::Database;
use chrono::{DateTime, Local, TimeDelta, TimeZone, Utc};
use mockable::Clock;
use std::sync::{Arc, Mutex, MutexGuard};
use tempfile::TempDir;

/// Clock pinned to a fixed instant that tests advance explicitly.
pub(crate) struct MutableClock(Mutex<DateTime<Utc>>);

impl MutableClock {
    pub(crate) fn new(now: DateTime<Utc>) -> Self {
        Self(Mutex::new(now))
    }

    /// Clock starting at 2026-02-24T10:30:00.250Z.
    pub(crate) fn fixed() -> Self {
        let start = Utc
            .with_ymd_and_hms(2026, 2, 24, 10, 30, 0)
            .single()
            .expect("valid fixture timestamp")
            + TimeDelta::milliseconds(250);
        Self::new(start)
    }

    pub(crate) fn advance(&self, delta: TimeDelta) {
        *self.lock_clock() += delta;
    }

    pub(crate) fn advance_days(&self, days: i64) {
        self.advance(TimeDelta::days(days));
    }

    fn lock_clock(&self) -> MutexGuard<'_, DateTime<Utc>> {
        self.0.lock().expect("clock mutex")
    }
}

impl Clock for MutableClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        *self.lock_clock()
    }
}

/// Creates an isolated file-backed database driven by `clock`.
///
/// Keep the [`TempDir`] alive for the full test to preserve the backing files.
///
/// # Panics
/// Panics if temp-dir creation or database initialization fails.
pub(crate) fn setup_temp_db_with_clock(clock: Arc<MutableClock>) -> (Database, TempDir) {
    let temp_dir = TempDir::new().expect("temp dir");
    let db_path = temp_dir.path().join("nested").join("test.db");
    let config = Config {
        db_path: db_path.to_string_lossy().to_string(),
        busy_timeout_ms: 1_000,
        wal: true,
    };
    let db = Database::open_with_clock(&config, clock).expect("db");
    (db, temp_dir)
}

/// Creates an isolated file-backed database on a fixed clock.
pub(crate) fn setup_temp_db() -> (Database, Arc<MutableClock>, TempDir) {
    let clock = Arc::new(MutableClock::fixed());
    let (db, temp_dir) = setup_temp_db_with_clock(clock.clone());
    (db, clock, temp_dir)
}
