//! User records returned by the user stores.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// A registered account.
///
/// `hashed_password` holds the encoded password hash, never the plaintext.
/// It is skipped during serialization and redacted from `Debug` output.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub hashed_password: Vec<u8>,
    pub created: DateTime<Utc>,
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("hashed_password", &"<redacted>")
            .field("created", &self.created)
            .finish()
    }
}
