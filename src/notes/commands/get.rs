use crate::error::Result;
use crate::model::Note;
use crate::store::NoteStore;

pub fn run<S: NoteStore>(store: &S, id: &str) -> Result<Option<Note>> {
    store.get_note(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn finds_existing_note() {
        let store = StoreFixture::new().with_notes(2).store;
        let note = run(&store, "note-2").unwrap().unwrap();
        assert_eq!(note.title, "Test Note 2");
    }

    #[test]
    fn unknown_id_is_none() {
        let store = StoreFixture::new().with_notes(1).store;
        assert_eq!(run(&store, "nope").unwrap(), None);
        assert_eq!(run(&store, "").unwrap(), None);
    }
}
