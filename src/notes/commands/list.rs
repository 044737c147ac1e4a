use crate::error::Result;
use crate::model::Note;
use crate::store::NoteStore;

/// All notes, newest `created_at` first.
///
/// Notes sharing a `created_at` are ordered by insertion, most recent first,
/// so repeated calls always agree.
pub fn run<S: NoteStore>(store: &S) -> Result<Vec<Note>> {
    let mut notes = store.list_notes()?;
    notes.reverse();
    // stable: equal timestamps keep the reversed insertion order
    notes.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Ok(notes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NewNote;
    use crate::store::memory::fixtures::{epoch, StoreFixture};
    use crate::store::memory::InMemoryStore;
    use chrono::Duration;

    fn ids(notes: &[Note]) -> Vec<&str> {
        notes.iter().map(|n| n.id.as_str()).collect()
    }

    #[test]
    fn newest_first() {
        let store = StoreFixture::new()
            .with_note("a", "A", "a")
            .with_note("b", "B", "b")
            .with_note("c", "C", "c")
            .store;
        assert_eq!(ids(&run(&store).unwrap()), vec!["c", "b", "a"]);
    }

    #[test]
    fn orders_by_created_at_not_insertion() {
        let mut store = InMemoryStore::new();
        for (id, minutes) in [("late", 10), ("early", 1), ("middle", 5)] {
            let note = Note::new(
                id.into(),
                NewNote::new(id, "x"),
                epoch() + Duration::minutes(minutes),
            );
            store.save_note(&note).unwrap();
        }
        assert_eq!(ids(&run(&store).unwrap()), vec!["late", "middle", "early"]);
    }

    #[test]
    fn ties_break_by_most_recent_insertion() {
        let mut store = InMemoryStore::new();
        for id in ["first", "second", "third"] {
            let note = Note::new(id.into(), NewNote::new(id, "x"), epoch());
            store.save_note(&note).unwrap();
        }
        let listed = run(&store).unwrap();
        assert_eq!(ids(&listed), vec!["third", "second", "first"]);
        assert_eq!(run(&store).unwrap(), listed);
    }

    #[test]
    fn empty_store_lists_nothing() {
        let store = InMemoryStore::new();
        assert!(run(&store).unwrap().is_empty());
    }
}
