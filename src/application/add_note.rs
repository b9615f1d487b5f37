//! Add note use case

use crate::domain::Note;
use crate::error::Result;
use crate::infrastructure::NoteManager;

/// Create a new note and return it.
pub fn add_note(manager: &mut dyn NoteManager, title: &str, content: &str) -> Result<Note> {
    manager.create(title, content)
}
