//! JSON-file storage backend

use std::fs;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::domain::Note;
use crate::error::Result;
use crate::infrastructure::manager::NoteManager;
use crate::infrastructure::memory::InMemoryManager;

/// Stores the full note set as a JSON array in a single file.
///
/// The file is rewritten wholesale after every successful mutation, making
/// it the authoritative snapshot for any process that reads it afterwards.
/// There is no locking and no atomic replace: two processes running the
/// read-modify-write cycle concurrently race with last-writer-wins.
#[derive(Debug)]
pub struct JsonFileManager {
    inner: InMemoryManager,
    path: PathBuf,
}

impl JsonFileManager {
    /// Open a store at `path`, creating an empty file if none exists, then
    /// load whatever the file holds.
    ///
    /// Unparseable content is treated the same as an empty file: the store
    /// starts empty and the old bytes stay on disk until the first
    /// successful save overwrites them. A warning is the only trace of the
    /// downgrade.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if !path.exists() {
            fs::write(&path, "")?;
        }

        let mut manager = JsonFileManager {
            inner: InMemoryManager::new(),
            path,
        };
        manager.load()?;
        Ok(manager)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&mut self) -> Result<()> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::warn!(
                    "note file vanished before load, starting empty: {}",
                    self.path.display()
                );
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };

        if contents.is_empty() {
            return Ok(());
        }

        match serde_json::from_str::<Vec<Note>>(&contents) {
            Ok(notes) => {
                for note in notes {
                    self.inner.insert(note);
                }
                log::info!(
                    "loaded {} notes from {}",
                    self.inner.len(),
                    self.path.display()
                );
            }
            Err(e) => {
                log::warn!(
                    "could not parse {}, starting empty: {}",
                    self.path.display(),
                    e
                );
            }
        }

        Ok(())
    }

    /// Serialize the entire live set over the file's previous contents.
    fn save(&self) -> Result<()> {
        let notes = self.inner.list_all();
        let contents = serde_json::to_string_pretty(&notes)?;
        fs::write(&self.path, contents)?;
        log::debug!("saved {} notes to {}", notes.len(), self.path.display());
        Ok(())
    }
}

impl NoteManager for JsonFileManager {
    fn create(&mut self, title: &str, content: &str) -> Result<Note> {
        let note = self.inner.create(title, content)?;
        // A failed save leaves memory and disk diverged until the next
        // successful save; the in-memory state is not rolled back.
        self.save()?;
        Ok(note)
    }

    fn get_by_id(&self, id: Uuid) -> Option<Note> {
        self.inner.get_by_id(id)
    }

    fn list_all(&self) -> Vec<Note> {
        self.inner.list_all()
    }

    fn update(&mut self, id: Uuid, title: &str, content: &str) -> Result<Option<Note>> {
        let updated = self.inner.update(id, title, content)?;
        if updated.is_some() {
            self.save()?;
        }
        Ok(updated)
    }

    fn delete(&mut self, id: Uuid) -> Result<bool> {
        let deleted = self.inner.delete(id)?;
        if deleted {
            self.save()?;
        }
        Ok(deleted)
    }

    fn search(&self, query: &str) -> Vec<Note> {
        self.inner.search(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_path(temp: &TempDir) -> PathBuf {
        temp.path().join("notes.json")
    }

    #[test]
    fn test_open_creates_missing_file() {
        let temp = TempDir::new().unwrap();
        let path = store_path(&temp);
        assert!(!path.exists());

        let manager = JsonFileManager::open(&path).unwrap();
        assert!(path.exists());
        assert!(manager.list_all().is_empty());
    }

    #[test]
    fn test_open_empty_file_is_empty_store() {
        let temp = TempDir::new().unwrap();
        let path = store_path(&temp);
        fs::write(&path, "").unwrap();

        let manager = JsonFileManager::open(&path).unwrap();
        assert!(manager.list_all().is_empty());
    }

    #[test]
    fn test_open_corrupt_file_starts_empty() {
        let temp = TempDir::new().unwrap();
        let path = store_path(&temp);
        fs::write(&path, "this is not json {{{").unwrap();

        let manager = JsonFileManager::open(&path).unwrap();
        assert!(manager.list_all().is_empty());
    }

    #[test]
    fn test_corrupt_file_kept_on_disk_until_first_save() {
        let temp = TempDir::new().unwrap();
        let path = store_path(&temp);
        fs::write(&path, "garbage").unwrap();

        let mut manager = JsonFileManager::open(&path).unwrap();

        // A miss mutates nothing, so the old bytes must survive.
        assert!(manager.update(Uuid::new_v4(), "x", "y").unwrap().is_none());
        assert!(!manager.delete(Uuid::new_v4()).unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "garbage");

        // The first real mutation overwrites them.
        manager.create("fresh", "start").unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("fresh"));
        assert!(!contents.contains("garbage"));
    }

    #[test]
    fn test_round_trip_through_fresh_instance() {
        let temp = TempDir::new().unwrap();
        let path = store_path(&temp);

        let mut first = JsonFileManager::open(&path).unwrap();
        first.create("Shopping", "1. Milk\n2. Bread").unwrap();
        first.create("Meeting", "Meeting with team at 04:00PM").unwrap();
        first.create("Ideas", "").unwrap();

        let second = JsonFileManager::open(&path).unwrap();
        assert_eq!(second.list_all(), first.list_all());
    }

    #[test]
    fn test_every_mutation_rewrites_the_file() {
        let temp = TempDir::new().unwrap();
        let path = store_path(&temp);

        let mut manager = JsonFileManager::open(&path).unwrap();
        let note = manager.create("Title", "Content").unwrap();
        assert!(fs::read_to_string(&path).unwrap().contains("Title"));

        manager.update(note.id, "Renamed", "Content").unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("Renamed"));
        assert!(!contents.contains("\"Title\""));

        manager.delete(note.id).unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        assert!(!contents.contains("Renamed"));
    }

    #[test]
    fn test_file_preserves_insertion_order() {
        let temp = TempDir::new().unwrap();
        let path = store_path(&temp);

        let mut manager = JsonFileManager::open(&path).unwrap();
        let first = manager.create("first", "").unwrap();
        let second = manager.create("second", "").unwrap();

        let reopened = JsonFileManager::open(&path).unwrap();
        let ids: Vec<Uuid> = reopened.list_all().iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![first.id, second.id]);
    }

    #[test]
    fn test_find_by_prefix_over_loaded_fixture() {
        let temp = TempDir::new().unwrap();
        let path = store_path(&temp);
        fs::write(
            &path,
            r#"[
  {
    "id": "a1b2c3d4-0001-4000-8000-000000000000",
    "title": "one",
    "content": "",
    "created_at": "2026-08-01T10:00:00Z",
    "updated_at": "2026-08-01T10:00:00Z"
  },
  {
    "id": "a1b2c3d4-0002-4000-8000-000000000000",
    "title": "two",
    "content": "",
    "created_at": "2026-08-01T11:00:00Z",
    "updated_at": "2026-08-01T11:00:00Z"
  }
]"#,
        )
        .unwrap();

        let manager = JsonFileManager::open(&path).unwrap();

        let unique = manager.find_by_prefix("a1b2c3d4-0001").unwrap();
        assert_eq!(unique.title, "one");

        match manager.find_by_prefix("a1b2c3d4") {
            Err(crate::error::NotaError::AmbiguousId { matches, .. }) => {
                assert_eq!(
                    matches,
                    vec![
                        "a1b2c3d4-0001-4000-8000-000000000000".to_string(),
                        "a1b2c3d4-0002-4000-8000-000000000000".to_string(),
                    ]
                );
            }
            other => panic!("Expected AmbiguousId, got {:?}", other),
        }
    }
}
