use crate::error::Result;
use crate::model::{Note, NoteChanges};
use crate::store::NoteStore;
use chrono::{DateTime, Utc};

/// Merges `changes` into the note with `id`. Returns `None` if there is no such note.
pub fn run<S: NoteStore>(
    store: &mut S,
    id: &str,
    changes: NoteChanges,
    now: DateTime<Utc>,
) -> Result<Option<Note>> {
    let Some(mut note) = store.get_note(id)? else {
        return Ok(None);
    };

    note.apply(changes, now);
    store.save_note(&note)?;
    Ok(Some(note))
}
