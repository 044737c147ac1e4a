use crate::error::Result;
use crate::model::{generate_id, NewNote, Note};
use crate::store::NoteStore;
use chrono::{DateTime, Utc};

pub fn run<S: NoteStore>(store: &mut S, data: NewNote, now: DateTime<Utc>) -> Result<Note> {
    run_with_ids(store, data, now, generate_id)
}

/// Creates a note using `next_id` as the id source.
///
/// Ids already present in the store are skipped, so a colliding id is never issued.
pub fn run_with_ids<S, F>(
    store: &mut S,
    data: NewNote,
    now: DateTime<Utc>,
    mut next_id: F,
) -> Result<Note>
where
    S: NoteStore,
    F: FnMut() -> String,
{
    let mut id = next_id();
    while store.contains_note(&id)? {
        id = next_id();
    }

    let note = Note::new(id, data, now);
    store.save_note(&note)?;
    Ok(note)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::{epoch, StoreFixture};
    use crate::store::memory::InMemoryStore;

    #[test]
    fn creates_note_with_matching_fields() {
        let mut store = InMemoryStore::new();
        let note = run(&mut store, NewNote::new("Shopping", "milk, eggs"), epoch()).unwrap();

        assert_eq!(note.title, "Shopping");
        assert_eq!(note.content, "milk, eggs");
        assert_eq!(note.created_at, epoch());
        assert_eq!(note.created_at, note.updated_at);
        assert_eq!(store.get_note(&note.id).unwrap(), Some(note));
    }

    #[test]
    fn issues_distinct_ids() {
        let mut store = InMemoryStore::new();
        let a = run(&mut store, NewNote::new("A", "a"), epoch()).unwrap();
        let b = run(&mut store, NewNote::new("B", "b"), epoch()).unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn skips_ids_already_in_use() {
        let mut store = StoreFixture::new().with_note("taken", "Old", "old").store;
        let mut ids = vec!["fresh".to_string(), "taken".to_string()];

        let note = run_with_ids(&mut store, NewNote::new("New", "new"), epoch(), || {
            ids.pop().unwrap()
        })
        .unwrap();

        assert_eq!(note.id, "fresh");
        assert_eq!(store.get_note("taken").unwrap().unwrap().title, "Old");
    }
}
