//! Backend selection and lifetime policy

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use once_cell::sync::Lazy;
use uuid::Uuid;

use crate::domain::Note;
use crate::error::{NotaError, Result};
use crate::infrastructure::config::{Config, StorageKind};
use crate::infrastructure::json::JsonFileManager;
use crate::infrastructure::manager::NoteManager;
use crate::infrastructure::memory::InMemoryManager;

/// The one process-wide in-memory store.
///
/// An in-memory backend has nothing to re-read, so handing out a fresh
/// instance per call would silently lose every prior note. The JSON backend
/// is the opposite case: it is rebuilt on every call so that concurrent
/// processes each observe the current file contents instead of a stale
/// cached snapshot. Backend lifetime must match its durability model.
static PROCESS_STORE: Lazy<Arc<Mutex<InMemoryManager>>> =
    Lazy::new(|| Arc::new(Mutex::new(InMemoryManager::new())));

/// Handle onto a shared in-memory store; locks around each operation.
pub struct SharedMemoryManager {
    inner: Arc<Mutex<InMemoryManager>>,
}

impl SharedMemoryManager {
    /// Handle onto the process-wide singleton store.
    pub fn process_wide() -> Self {
        SharedMemoryManager {
            inner: Arc::clone(&PROCESS_STORE),
        }
    }

    /// Handle onto a private store, detached from the process singleton.
    #[cfg(test)]
    fn detached() -> Self {
        SharedMemoryManager {
            inner: Arc::new(Mutex::new(InMemoryManager::new())),
        }
    }

    fn lock(&self) -> MutexGuard<'_, InMemoryManager> {
        // Every operation leaves the map consistent, so a panic while the
        // lock was held cannot have corrupted it.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl NoteManager for SharedMemoryManager {
    fn create(&mut self, title: &str, content: &str) -> Result<Note> {
        self.lock().create(title, content)
    }

    fn get_by_id(&self, id: Uuid) -> Option<Note> {
        self.lock().get_by_id(id)
    }

    fn list_all(&self) -> Vec<Note> {
        self.lock().list_all()
    }

    fn update(&mut self, id: Uuid, title: &str, content: &str) -> Result<Option<Note>> {
        self.lock().update(id, title, content)
    }

    fn delete(&mut self, id: Uuid) -> Result<bool> {
        self.lock().delete(id)
    }

    fn search(&self, query: &str) -> Vec<Note> {
        self.lock().search(query)
    }
}

/// Produce a manager instance for the configured storage kind.
pub fn open_manager(config: &Config) -> Result<Box<dyn NoteManager>> {
    match config.storage {
        StorageKind::Json => Ok(Box::new(JsonFileManager::open(&config.db_path)?)),
        StorageKind::Memory => Ok(Box::new(SharedMemoryManager::process_wide())),
        StorageKind::Sql => Err(NotaError::Config(
            "storage kind 'sql' is reserved but not implemented; use 'json' or 'memory'"
                .to_string(),
        )),
    }
}
