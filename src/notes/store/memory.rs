use super::NoteStore;
use crate::error::Result;
use crate::model::Note;
use std::collections::HashMap;

#[derive(Debug, Clone)]
struct Entry {
    seq: u64,
    note: Note,
}

/// In-memory note storage. Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    notes: HashMap<String, Entry>,
    next_seq: u64,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(any(test, feature = "test_utils"))]
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    #[cfg(any(test, feature = "test_utils"))]
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

impl NoteStore for InMemoryStore {
    fn save_note(&mut self, note: &Note) -> Result<()> {
        if let Some(entry) = self.notes.get_mut(&note.id) {
            entry.note = note.clone();
            return Ok(());
        }
        let seq = self.next_seq;
        self.next_seq += 1;
        self.notes.insert(
            note.id.clone(),
            Entry {
                seq,
                note: note.clone(),
            },
        );
        Ok(())
    }

    fn get_note(&self, id: &str) -> Result<Option<Note>> {
        Ok(self.notes.get(id).map(|entry| entry.note.clone()))
    }

    fn list_notes(&self) -> Result<Vec<Note>> {
        let mut entries: Vec<&Entry> = self.notes.values().collect();
        entries.sort_by_key(|entry| entry.seq);
        Ok(entries.into_iter().map(|entry| entry.note.clone()).collect())
    }

    fn remove_note(&mut self, id: &str) -> Result<bool> {
        Ok(self.notes.remove(id).is_some())
    }

    fn contains_note(&self, id: &str) -> Result<bool> {
        Ok(self.notes.contains_key(id))
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::NewNote;
    use chrono::{DateTime, Duration, TimeZone, Utc};

    /// Fixed starting instant for fixture notes.
    pub fn epoch() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    pub struct StoreFixture {
        pub store: InMemoryStore,
        next_minute: i64,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
                next_minute: 0,
            }
        }

        /// Adds `count` notes, one minute apart, with ids `note-1`, `note-2`, ...
        pub fn with_notes(mut self, count: usize) -> Self {
            for i in 0..count {
                let title = format!("Test Note {}", i + 1);
                let content = format!("Content for note {}", i + 1);
                self = self.with_note(&format!("note-{}", i + 1), &title, &content);
            }
            self
        }

        pub fn with_note(mut self, id: &str, title: &str, content: &str) -> Self {
            let created = epoch() + Duration::minutes(self.next_minute);
            self.next_minute += 1;
            let note = Note::new(id.to_string(), NewNote::new(title, content), created);
            self.store.save_note(&note).unwrap();
            self
        }
    }
}
