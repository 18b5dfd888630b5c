//! Snippet records returned by the snippet stores.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored text item, visible until `expires`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub created: DateTime<Utc>,
    pub expires: DateTime<Utc>,
}

impl Snippet {
    /// Whether the snippet is still inside its expiry window at `now`.
    pub fn is_visible_at(&self, now: DateTime<Utc>) -> bool {
        self.expires > now
    }
}
