//! Remove note use case

use crate::domain::Note;
use crate::error::Result;
use crate::infrastructure::NoteManager;

/// Delete a note resolved from a short-id prefix.
///
/// Returns the removed note so the caller can echo what went away.
pub fn remove_note(manager: &mut dyn NoteManager, short_id: &str) -> Result<Note> {
    let note = manager.find_by_prefix(short_id)?;
    manager.delete(note.id)?;
    Ok(note)
}
