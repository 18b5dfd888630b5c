//! Configuration loading from environment variables.

use crate::constants::{DEFAULT_BUSY_TIMEOUT_MS, DEFAULT_DB_RELATIVE_PATH};
use serde::Deserialize;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Runtime configuration for the storage core.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Config {
    pub db_path: String,
    pub busy_timeout_ms: u64,
    pub wal: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Reads `DB_PATH`, `DB_BUSY_TIMEOUT_MS`, and `DB_WAL`.
    ///
    /// # Returns
    /// A populated [`Config`] with defaults applied when env vars are missing.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    ///
    /// Malformed numeric or boolean values fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let home = resolve_home_dir(&lookup);
        Self {
            db_path: lookup("DB_PATH")
                .map(|path| expand_tilde(path, home.as_ref()))
                .unwrap_or_else(|| {
                    home.unwrap_or_else(|| PathBuf::from("."))
                        .join(DEFAULT_DB_RELATIVE_PATH)
                        .to_string_lossy()
                        .to_string()
                }),
            busy_timeout_ms: lookup("DB_BUSY_TIMEOUT_MS")
                .and_then(|value| value.trim().parse().ok())
                .unwrap_or(DEFAULT_BUSY_TIMEOUT_MS),
            wal: lookup("DB_WAL")
                .and_then(|value| parse_env_flag(&value))
                .unwrap_or(true),
        }
    }

    /// How long a statement may wait on a locked database.
    pub fn busy_timeout(&self) -> Duration {
        Duration::from_millis(self.busy_timeout_ms)
    }
}

fn expand_tilde(path: String, home: Option<&PathBuf>) -> String {
    match (path.strip_prefix("~/"), home) {
        (Some(rest), Some(home)) => home.join(rest).to_string_lossy().to_string(),
        _ => path,
    }
}

fn resolve_home_dir<F>(lookup: &F) -> Option<PathBuf>
where
    F: Fn(&str) -> Option<String>,
{
    let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

    if let Some(home) = non_empty("HOME") {
        return Some(PathBuf::from(home));
    }
    // Windows
    if let Some(profile) = non_empty("USERPROFILE") {
        return Some(PathBuf::from(profile));
    }
    std::env::current_dir().ok()
}

/// Parse a boolean-like environment flag value.
///
/// # Supported Values
/// - Truthy: `1`, `true`, `yes`, `on`
/// - Falsy: `0`, `false`, `no`, `off`, empty string
///
/// Matching is case-insensitive and ignores surrounding whitespace.
///
/// # Returns
/// `Some(bool)` when the value is recognized, otherwise `None`.
pub fn parse_env_flag(value: &str) -> Option<bool> {
    let normalized = value.trim().to_ascii_lowercase();
    match normalized.as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "" | "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
