//! In-memory storage backend

use std::collections::HashMap;

use uuid::Uuid;

use crate::domain::Note;
use crate::error::Result;
use crate::infrastructure::manager::NoteManager;

/// Keyed in-process store with no durability.
///
/// Notes live in a map for O(1) id access; `order` preserves insertion
/// order for listing. The JSON-file backend composes over this type and
/// rewrites its file after each mutation.
#[derive(Debug, Default)]
pub struct InMemoryManager {
    notes: HashMap<Uuid, Note>,
    order: Vec<Uuid>,
}

impl InMemoryManager {
    pub fn new() -> Self {
        InMemoryManager::default()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Insert an already-built note. Used when the JSON backend replays
    /// records from its file; insertion order follows call order.
    pub(crate) fn insert(&mut self, note: Note) {
        if !self.notes.contains_key(&note.id) {
            self.order.push(note.id);
        }
        self.notes.insert(note.id, note);
    }
}

impl NoteManager for InMemoryManager {
    fn create(&mut self, title: &str, content: &str) -> Result<Note> {
        let note = Note::new(title, content);
        self.insert(note.clone());
        log::info!("note created id={}", note.id);
        Ok(note)
    }

    fn get_by_id(&self, id: Uuid) -> Option<Note> {
        self.notes.get(&id).cloned()
    }

    fn list_all(&self) -> Vec<Note> {
        self.order
            .iter()
            .filter_map(|id| self.notes.get(id))
            .cloned()
            .collect()
    }

    fn update(&mut self, id: Uuid, title: &str, content: &str) -> Result<Option<Note>> {
        match self.notes.get_mut(&id) {
            Some(note) => {
                note.apply_update(title, content);
                log::info!("note updated id={}", id);
                Ok(Some(note.clone()))
            }
            None => {
                log::warn!("update failed, no note with id={}", id);
                Ok(None)
            }
        }
    }

    fn delete(&mut self, id: Uuid) -> Result<bool> {
        if self.notes.remove(&id).is_some() {
            self.order.retain(|kept| *kept != id);
            log::info!("note deleted id={}", id);
            Ok(true)
        } else {
            log::warn!("delete failed, no note with id={}", id);
            Ok(false)
        }
    }

    fn search(&self, query: &str) -> Vec<Note> {
        if query.is_empty() {
            return Vec::new();
        }

        let needle = query.to_lowercase();
        self.list_all()
            .into_iter()
            .filter(|note| {
                note.title.to_lowercase().contains(&needle)
                    || note.content.to_lowercase().contains(&needle)
            })
            .collect()
    }
}
