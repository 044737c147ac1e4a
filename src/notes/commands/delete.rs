use crate::error::Result;
use crate::store::NoteStore;

/// Removes the note with `id`. Returns `false` if it did not exist.
pub fn run<S: NoteStore>(store: &mut S, id: &str) -> Result<bool> {
    store.remove_note(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::get;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn second_delete_reports_missing() {
        let mut store = StoreFixture::new().with_notes(2).store;
        assert!(run(&mut store, "note-1").unwrap());
        assert!(!run(&mut store, "note-1").unwrap());
        assert_eq!(get::run(&store, "note-1").unwrap(), None);
        assert!(get::run(&store, "note-2").unwrap().is_some());
    }

    #[test]
    fn unknown_id_is_false() {
        let mut store = StoreFixture::new().store;
        assert!(!run(&mut store, "never-issued").unwrap());
    }
}
