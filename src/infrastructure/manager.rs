//! The manager contract shared by all storage backends

use crate::domain::Note;
use crate::error::{NotaError, Result};
use uuid::Uuid;

/// Contract implemented by every note storage backend.
///
/// Callers obtain an implementation from the backend selector and never
/// touch stored notes directly; every returned [`Note`] is an owned copy,
/// and all changes go back through this interface.
pub trait NoteManager: Send {
    /// Create a note with a fresh unique id and both timestamps set to the
    /// current time. The `Err` case only carries persistence write failures.
    fn create(&mut self, title: &str, content: &str) -> Result<Note>;

    /// Pure lookup; a miss is an absence, not an error.
    fn get_by_id(&self, id: Uuid) -> Option<Note>;

    /// Every live note, in insertion order.
    fn list_all(&self) -> Vec<Note>;

    /// Overwrite title/content and refresh `updated_at`, leaving
    /// `created_at` untouched. An unknown id yields `Ok(None)` without
    /// side effects.
    fn update(&mut self, id: Uuid, title: &str, content: &str) -> Result<Option<Note>>;

    /// Remove a note. Returns whether it existed; deleting the same id
    /// again yields `Ok(false)`.
    fn delete(&mut self, id: Uuid) -> Result<bool>;

    /// Case-insensitive substring match on title or content.
    /// An empty query matches nothing rather than everything.
    fn search(&self, query: &str) -> Vec<Note>;

    /// Resolve a note from a leading fragment of its hyphenated id.
    ///
    /// Unlike [`get_by_id`](Self::get_by_id) a miss here is an error: the
    /// caller is typically a human typing a truncated id and needs to
    /// distinguish "nothing matches" from "several match". The ambiguous
    /// case carries the full list of matching ids.
    fn find_by_prefix(&self, short_id: &str) -> Result<Note> {
        if short_id.is_empty() {
            return Err(NotaError::EmptyPrefix);
        }

        let mut matches: Vec<Note> = self
            .list_all()
            .into_iter()
            .filter(|note| note.id.to_string().starts_with(short_id))
            .collect();

        if matches.is_empty() {
            return Err(NotaError::NoteNotFound(short_id.to_string()));
        }
        if matches.len() > 1 {
            return Err(NotaError::AmbiguousId {
                prefix: short_id.to_string(),
                matches: matches.iter().map(|note| note.id.to_string()).collect(),
            });
        }

        Ok(matches.remove(0))
    }
}
