//! # Storage Layer
//!
//! The [`NoteStore`] trait is the storage abstraction the command layer works
//! against. It knows nothing about validation, clocks or id generation: it keeps
//! whatever notes it is handed.
//!
//! ## Implementations
//!
//! - [`memory::InMemoryStore`]: a keyed map that also remembers insertion order.
//!   Nothing survives the process.
//!
//! ## Ordering
//!
//! [`NoteStore::list_notes`] returns notes in insertion order. Re-saving an
//! existing note keeps its original position. The command layer relies on this
//! to break ties between notes created at the same instant.

use crate::error::Result;
use crate::model::Note;

pub mod memory;

/// Abstract interface for note storage.
pub trait NoteStore {
    /// Save a note, inserting it or replacing the note with the same id
    fn save_note(&mut self, note: &Note) -> Result<()>;

    /// Get a note by id, `None` when absent
    fn get_note(&self, id: &str) -> Result<Option<Note>>;

    /// List all notes in insertion order
    fn list_notes(&self) -> Result<Vec<Note>>;

    /// Remove a note, reporting whether it existed
    fn remove_note(&mut self, id: &str) -> Result<bool>;

    fn contains_note(&self, id: &str) -> Result<bool> {
        Ok(self.get_note(id)?.is_some())
    }
}
