//! Shared constants used across the snippetbox core.

/// Default database file, relative to the user's home directory.
pub const DEFAULT_DB_RELATIVE_PATH: &str = ".cache/snippetbox/snippetbox.db";

/// Default time a statement waits on a locked database before failing.
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

/// Maximum number of snippets returned by the latest-snippets listing.
pub const LATEST_SNIPPETS_LIMIT: usize = 10;

/// Expiry windows (in days) a snippet form may request.
pub const PERMITTED_EXPIRES_DAYS: [u32; 3] = [1, 7, 365];

/// Upper bound on snippet title length, in characters.
pub const SNIPPET_TITLE_MAX_CHARS: usize = 100;

/// Lower bound on signup password length, in characters.
pub const MIN_PASSWORD_CHARS: usize = 8;

/// Largest password (in bytes) accepted by the hasher.
pub const MAX_PASSWORD_BYTES: usize = 1_024;

/// Argon2id iteration count.
pub const ARGON2_TIME_COST: u32 = 2;
/// Argon2id memory cost in KiB (19 MiB).
pub const ARGON2_MEMORY_KIB: u32 = 19 * 1024;
/// Argon2id lane count.
pub const ARGON2_PARALLELISM: u32 = 1;

/// Column reported by SQLite when the email uniqueness constraint fires.
pub const USERS_EMAIL_COLUMN: &str = "users.email";
