//! In-memory store doubles for handler-layer tests.

use super::{SnippetStore, UserStore};
use crate::constants::LATEST_SNIPPETS_LIMIT;
use crate::db::SharedClock;
use crate::error::AppError;
use crate::models::{snippet::Snippet, user::User};
use crate::password::PasswordHasher;
use chrono::{DateTime, TimeDelta, Utc};
use mockable::DefaultClock;
use std::sync::{Arc, Mutex, MutexGuard};

fn lock<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>, AppError> {
    mutex
        .lock()
        .map_err(|_| AppError::StorageUnavailable("in-memory store lock poisoned".to_string()))
}

fn now_millis(clock: &SharedClock) -> DateTime<Utc> {
    let now = clock.utc();
    DateTime::from_timestamp_millis(now.timestamp_millis()).unwrap_or(now)
}

#[derive(Default)]
struct SnippetRows {
    last_id: i64,
    rows: Vec<Snippet>,
}

/// Vector-backed [`SnippetStore`].
pub struct MemorySnippetStore {
    state: Mutex<SnippetRows>,
    clock: SharedClock,
}

impl MemorySnippetStore {
    /// Empty store reading time from `clock`.
    pub fn new(clock: SharedClock) -> Self {
        Self {
            state: Mutex::new(SnippetRows::default()),
            clock,
        }
    }
}

impl Default for MemorySnippetStore {
    fn default() -> Self {
        Self::new(Arc::new(DefaultClock))
    }
}

impl SnippetStore for MemorySnippetStore {
    fn insert(&self, title: &str, content: &str, expires_days: u32) -> Result<i64, AppError> {
        let created = now_millis(&self.clock);
        let expires = TimeDelta::try_days(i64::from(expires_days))
            .and_then(|delta| created.checked_add_signed(delta))
            .ok_or_else(|| {
                AppError::Internal(format!("expiry of {} days is out of range", expires_days))
            })?;

        let mut state = lock(&self.state)?;
        state.last_id += 1;
        let id = state.last_id;
        state.rows.push(Snippet {
            id,
            title: title.to_string(),
            content: content.to_string(),
            created,
            expires,
        });
        Ok(id)
    }

    fn get(&self, id: i64) -> Result<Snippet, AppError> {
        let now = self.clock.utc();
        lock(&self.state)?
            .rows
            .iter()
            .find(|snippet| snippet.id == id && snippet.is_visible_at(now))
            .cloned()
            .ok_or(AppError::NotFound)
    }

    fn latest(&self) -> Result<Vec<Snippet>, AppError> {
        let now = self.clock.utc();
        Ok(lock(&self.state)?
            .rows
            .iter()
            .rev()
            .filter(|snippet| snippet.is_visible_at(now))
            .take(LATEST_SNIPPETS_LIMIT)
            .cloned()
            .collect())
    }
}

/// Vector-backed [`UserStore`] with real password hashing.
pub struct MemoryUserStore {
    users: Mutex<Vec<User>>,
    clock: SharedClock,
    hasher: PasswordHasher,
}

impl MemoryUserStore {
    /// Empty store reading time from `clock`.
    ///
    /// # Errors
    /// Returns [`AppError::PasswordHashing`] if the hasher cannot be built.
    pub fn new(clock: SharedClock) -> Result<Self, AppError> {
        Ok(Self {
            users: Mutex::new(Vec::new()),
            clock,
            hasher: PasswordHasher::new()?,
        })
    }
}

impl UserStore for MemoryUserStore {
    fn insert(&self, name: &str, email: &str, password: &str) -> Result<(), AppError> {
        let hashed_password = self.hasher.hash(password)?;
        let created = now_millis(&self.clock);

        let mut users = lock(&self.users)?;
        if users.iter().any(|user| user.email == email) {
            return Err(AppError::DuplicateEmail);
        }
        let id = users.last().map_or(1, |user| user.id + 1);
        users.push(User {
            id,
            name: name.to_string(),
            email: email.to_string(),
            hashed_password,
            created,
        });
        Ok(())
    }

    fn authenticate(&self, email: &str, password: &str) -> Result<i64, AppError> {
        let stored = lock(&self.users)?
            .iter()
            .find(|user| user.email == email)
            .map(|user| (user.id, user.hashed_password.clone()));

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
        Ok(lock(&self.users)?.iter().any(|user| user.id == id))
    }
}
