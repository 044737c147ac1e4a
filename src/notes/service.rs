//! # Notes Service
//!
//! [`NotesService`] is the single owner of the note collection. It wraps a
//! [`NoteStore`] in a mutex and routes every operation through one lock, so a
//! reader never sees a half-applied create, update or delete. The service is
//! built once at startup and shared by handle (`Arc<NotesService>`) with
//! whatever front end drives it.
//!
//! Timestamps come from an injected [`Clock`], read while the lock is held so
//! that `created_at` order matches insertion order.

use crate::clock::{Clock, SystemClock};
use crate::commands;
use crate::error::{NotesError, Result};
use crate::model::{NewNote, Note, NoteChanges};
use crate::store::memory::InMemoryStore;
use crate::store::NoteStore;
use chrono::{DateTime, Utc};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::debug;

pub struct NotesService<S: NoteStore = InMemoryStore> {
    store: Mutex<S>,
    clock: Arc<dyn Clock>,
}

impl NotesService<InMemoryStore> {
    /// An empty in-memory service on the system clock.
    pub fn in_memory() -> Self {
        Self::new(InMemoryStore::new())
    }
}

impl<S: NoteStore> NotesService<S> {
    pub fn new(store: S) -> Self {
        Self::with_clock(store, Arc::new(SystemClock))
    }

    pub fn with_clock(store: S, clock: Arc<dyn Clock>) -> Self {
        Self {
            store: Mutex::new(store),
            clock,
        }
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    pub fn create(&self, data: NewNote) -> Result<Note> {
        let mut store = self.lock()?;
        let note = commands::create::run(&mut *store, data, self.clock.now())?;
        debug!(id = %note.id, "note created");
        Ok(note)
    }

    pub fn get_all(&self) -> Result<Vec<Note>> {
        let store = self.lock()?;
        commands::list::run(&*store)
    }

    pub fn get_by_id(&self, id: &str) -> Result<Option<Note>> {
        let store = self.lock()?;
        commands::get::run(&*store, id)
    }

    pub fn update(&self, id: &str, changes: NoteChanges) -> Result<Option<Note>> {
        let touch_only = changes.is_empty();
        let mut store = self.lock()?;
        let updated = commands::update::run(&mut *store, id, changes, self.clock.now())?;
        match &updated {
            Some(note) => debug!(id = %note.id, touch_only, "note updated"),
            None => debug!(id, "update skipped, note not found"),
        }
        Ok(updated)
    }

    pub fn delete(&self, id: &str) -> Result<bool> {
        let mut store = self.lock()?;
        let removed = commands::delete::run(&mut *store, id)?;
        debug!(id, removed, "note delete");
        Ok(removed)
    }

    fn lock(&self) -> Result<MutexGuard<'_, S>> {
        self.store
            .lock()
            .map_err(|_| NotesError::Store("note store lock poisoned".to_string()))
    }
}
