//! List notes use case

use crate::domain::Note;
use crate::infrastructure::NoteManager;

/// All live notes, in insertion order.
pub fn list_notes(manager: &dyn NoteManager) -> Vec<Note> {
    manager.list_all()
}
