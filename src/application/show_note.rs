//! Show note use case

use crate::domain::Note;
use crate::error::Result;
use crate::infrastructure::NoteManager;

/// Resolve a note from a short-id prefix.
pub fn show_note(manager: &dyn NoteManager, short_id: &str) -> Result<Note> {
    manager.find_by_prefix(short_id)
}
