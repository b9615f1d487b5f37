//! Prefix resolution policy tests

use nota::error::NotaError;
use nota::infrastructure::{InMemoryManager, JsonFileManager, NoteManager};
use tempfile::TempDir;

fn for_each_backend(test: impl Fn(&mut dyn NoteManager)) {
    let mut memory = InMemoryManager::new();
    test(&mut memory);

    let temp = TempDir::new().unwrap();
    let mut json = JsonFileManager::open(temp.path().join("notes.json")).unwrap();
    test(&mut json);
}

/// Two notes sharing the `a1b2c3d4` prefix plus one outlier.
const AMBIGUOUS_FIXTURE: &str = r#"[
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
  },
  {
    "id": "ffffffff-0003-4000-8000-000000000000",
    "title": "other",
    "content": "",
    "created_at": "2026-08-01T12:00:00Z",
    "updated_at": "2026-08-01T12:00:00Z"
  }
]"#;

fn fixture_manager(temp: &TempDir) -> JsonFileManager {
    let path = temp.path().join("notes.json");
    std::fs::write(&path, AMBIGUOUS_FIXTURE).unwrap();
    JsonFileManager::open(&path).unwrap()
}

#[test]
fn test_empty_prefix_always_fails() {
    for_each_backend(|manager| {
        // Invalid on an empty store...
        match manager.find_by_prefix("") {
            Err(NotaError::EmptyPrefix) => {}
            other => panic!("Expected EmptyPrefix, got {:?}", other),
        }

        // ...and on a populated one; it never means "match everything".
        manager.create("some", "note").unwrap();
        assert!(matches!(
            manager.find_by_prefix(""),
            Err(NotaError::EmptyPrefix)
        ));
    });
}

#[test]
fn test_unique_prefix_resolves() {
    for_each_backend(|manager| {
        let note = manager.create("Note 1", "...").unwrap();

        let short = note.id.to_string()[..8].to_string();
        let found = manager.find_by_prefix(&short).unwrap();
        assert_eq!(found.id, note.id);

        // The full id is its own prefix.
        let found = manager.find_by_prefix(&note.id.to_string()).unwrap();
        assert_eq!(found.id, note.id);
    });
}

#[test]
fn test_zero_matches_is_not_found() {
    for_each_backend(|manager| {
        manager.create("Note 1", "...").unwrap();

        match manager.find_by_prefix("zzzzzzzz") {
            Err(NotaError::NoteNotFound(needle)) => assert_eq!(needle, "zzzzzzzz"),
            other => panic!("Expected NoteNotFound, got {:?}", other),
        }
    });
}

#[test]
fn test_ambiguous_prefix_lists_exactly_the_matching_ids() {
    let temp = TempDir::new().unwrap();
    let manager = fixture_manager(&temp);

    match manager.find_by_prefix("a1b2c3d4") {
        Err(NotaError::AmbiguousId { prefix, matches }) => {
            assert_eq!(prefix, "a1b2c3d4");
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

#[test]
fn test_longer_prefix_disambiguates() {
    let temp = TempDir::new().unwrap();
    let manager = fixture_manager(&temp);

    let found = manager.find_by_prefix("a1b2c3d4-0002").unwrap();
    assert_eq!(found.title, "two");
}

#[test]
fn test_prefix_match_is_case_sensitive() {
    let temp = TempDir::new().unwrap();
    let manager = fixture_manager(&temp);

    // Ids render as lowercase hex; an uppercase prefix matches nothing.
    assert!(matches!(
        manager.find_by_prefix("A1B2C3D4"),
        Err(NotaError::NoteNotFound(_))
    ));
}
