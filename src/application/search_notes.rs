//! Search notes use case

use crate::domain::Note;
use crate::infrastructure::NoteManager;

/// Case-insensitive substring search over titles and contents.
pub fn search_notes(manager: &dyn NoteManager, query: &str) -> Vec<Note> {
    manager.search(query)
}
