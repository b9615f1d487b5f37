//! Edit note use case

use crate::domain::Note;
use crate::error::{NotaError, Result};
use crate::infrastructure::NoteManager;

/// Update a note resolved from a short-id prefix.
///
/// Fields left as `None` keep their current value; the manager contract
/// itself is always a whole-record update.
pub fn edit_note(
    manager: &mut dyn NoteManager,
    short_id: &str,
    title: Option<&str>,
    content: Option<&str>,
) -> Result<Note> {
    let current = manager.find_by_prefix(short_id)?;

    let title = title.unwrap_or(&current.title);
    let content = content.unwrap_or(&current.content);

    manager
        .update(current.id, title, content)?
        // The note resolved a moment ago, so this only happens if another
        // writer removed it in between; surface it as a plain miss.
        .ok_or_else(|| NotaError::NoteNotFound(short_id.to_string()))
}
