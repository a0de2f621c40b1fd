//! Note board service: the single owner of store and persistence.
//!
//! # Responsibility
//! - Load the persisted list before any interaction is possible.
//! - Mirror the store's mutation surface, scheduling a debounced save after
//!   every observed list change.
//!
//! # Invariants
//! - Save is scheduled on every list change, including transitions to and
//!   from the empty list; no-op mutations schedule nothing.
//! - Mutations return nothing and never fail; persistence problems stay
//!   inside the bridge.
//! - Diagnostic events carry counts and ids only, never note text.

use crate::model::note::{Note, NoteId};
use crate::persist::{load_notes, DebouncedSaver, PersistConfig};
use crate::storage::KeyValueStorage;
use crate::store::NoteStore;
use log::info;

/// Single-screen note board state loop.
pub struct NotesService {
    store: NoteStore,
    saver: DebouncedSaver,
}

impl NotesService {
    /// Loads the stored list from `storage`, then hands the storage to the
    /// debounced save worker.
    ///
    /// Load completes (success or caught failure) before the saver exists,
    /// so no save can race the initial read.
    pub fn open<S>(mut storage: S, config: PersistConfig) -> Self
    where
        S: KeyValueStorage + Send + 'static,
    {
        let notes = load_notes(&mut storage, &config.storage_key);
        let store = NoteStore::with_notes(notes);
        let saver = DebouncedSaver::spawn(storage, config);
        Self { store, saver }
    }

    /// Current list, newest-first.
    pub fn notes(&self) -> &[Note] {
        self.store.notes()
    }

    pub fn editing_id(&self) -> Option<&NoteId> {
        self.store.editing_id()
    }

    pub fn edit_buffer(&self) -> &str {
        self.store.edit_buffer()
    }

    pub fn draft(&self) -> &str {
        self.store.draft()
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.store.set_draft(text);
    }

    pub fn set_edit_buffer(&mut self, text: impl Into<String>) {
        self.store.set_edit_buffer(text);
    }

    /// Adds a trimmed note at the front of the list; blank input is a
    /// silent no-op.
    pub fn add(&mut self, text: &str) {
        if self.store.add(text) {
            self.log_change("note_add");
            self.schedule_save();
        }
    }

    /// Submits and clears the draft buffer.
    pub fn submit_draft(&mut self) {
        if self.store.submit_draft() {
            self.log_change("note_add");
            self.schedule_save();
        }
    }

    /// Enters edit mode for `id`, abandoning any previous edit buffer.
    pub fn begin_edit(&mut self, id: &str) {
        self.store.begin_edit(id);
    }

    /// Commits or discards the current edit; see [`NoteStore::commit_edit`].
    pub fn commit_edit(&mut self) {
        if self.store.commit_edit() {
            self.log_change("note_edit");
            self.schedule_save();
        }
    }

    /// Deletes the note with `id`; an absent id is a no-op.
    pub fn delete(&mut self, id: &str) {
        if self.store.delete(id) {
            self.log_change("note_delete");
            self.schedule_save();
        }
    }

    fn log_change(&self, event: &str) {
        info!(
            "event={} module=service status=ok count={}",
            event,
            self.store.len()
        );
    }

    fn schedule_save(&self) {
        self.saver.schedule(self.store.notes().to_vec());
    }
}
