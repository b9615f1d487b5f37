//! The note entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single note with an immutable identity and mutable text fields.
///
/// `id` and `created_at` are fixed at creation; `title`, `content` and
/// `updated_at` change only through the manager's update operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Note {
    /// Create a new note with a fresh id and both timestamps set to now.
    pub fn new(title: &str, content: &str) -> Self {
        let now = Utc::now();
        Note {
            id: Uuid::new_v4(),
            title: title.to_string(),
            content: content.to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrite the text fields and refresh `updated_at`.
    /// `created_at` is never touched.
    pub fn apply_update(&mut self, title: &str, content: &str) {
        self.title = title.to_string();
        self.content = content.to_string();
        self.updated_at = Utc::now();
    }

    /// First 8 characters of the hyphenated id, for display.
    pub fn short_id(&self) -> String {
        self.id.to_string()[..8].to_string()
    }
}
