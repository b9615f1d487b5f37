//! Output formatting utilities

use crate::domain::Note;

/// Format notes as an aligned list: short id, update stamp, title.
pub fn format_note_list(notes: &[Note]) -> String {
    if notes.is_empty() {
        return "No notes found".to_string();
    }

    let mut output = String::new();
    for note in notes {
        output.push_str(&format!(
            "{}  {}  {}\n",
            note.short_id(),
            note.updated_at.format("%Y-%m-%d %H:%M"),
            note.title
        ));
    }
    output
}

/// Format a single note with its metadata and full content.
pub fn format_note_detail(note: &Note) -> String {
    format!(
        "id:      {}\ntitle:   {}\ncreated: {}\nupdated: {}\n\n{}\n",
        note.id,
        note.title,
        note.created_at.to_rfc3339(),
        note.updated_at.to_rfc3339(),
        note.content
    )
}
