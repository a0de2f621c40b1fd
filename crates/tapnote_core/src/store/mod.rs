//! In-memory note list state and mutation operations.
//!
//! # Responsibility
//! - Own the ordered note list, the edit cursor and the transient text
//!   buffers (draft input, edit buffer).
//! - Report from every mutation whether the note list itself changed, so the
//!   owner can schedule persistence.
//!
//! # Invariants
//! - New notes are prepended; existing order is otherwise preserved.
//! - No stored note ever has an empty or whitespace-only value.
//! - At most one note is in edit mode at any time.
//! - Invalid input degrades to a silent no-op; the store exposes no failure
//!   conditions.

use crate::model::note::{Note, NoteId};

/// Note list plus the editing state a single-screen UI binds to.
#[derive(Debug, Default)]
pub struct NoteStore {
    notes: Vec<Note>,
    editing_id: Option<NoteId>,
    edit_buffer: String,
    draft: String,
}

impl NoteStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with a previously persisted list.
    pub fn with_notes(notes: Vec<Note>) -> Self {
        Self {
            notes,
            ..Self::default()
        }
    }

    /// Current list, newest-first.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Id of the note currently in edit mode, if any.
    pub fn editing_id(&self) -> Option<&NoteId> {
        self.editing_id.as_ref()
    }

    /// Transient buffer backing the edit field.
    pub fn edit_buffer(&self) -> &str {
        &self.edit_buffer
    }

    /// Transient buffer backing the add-note field.
    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    pub fn set_edit_buffer(&mut self, text: impl Into<String>) {
        self.edit_buffer = text.into();
    }

    /// Adds a note from `text`, trimmed, at the front of the list.
    ///
    /// Empty or whitespace-only input is a silent no-op. Returns whether the
    /// list changed.
    pub fn add(&mut self, text: &str) -> bool {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return false;
        }
        self.notes.insert(0, Note::new(trimmed));
        true
    }

    /// Submits the draft buffer through [`NoteStore::add`].
    ///
    /// The draft is cleared whether or not a note was added, matching the
    /// input field emptying on submit.
    pub fn submit_draft(&mut self) -> bool {
        let draft = std::mem::take(&mut self.draft);
        self.add(&draft)
    }

    /// Enters edit mode for `id`, seeding the edit buffer with the note's
    /// current value.
    ///
    /// A previous unsaved edit buffer is abandoned without warning. An
    /// unknown id is a no-op. Never changes the list.
    pub fn begin_edit(&mut self, id: &str) {
        if let Some(note) = self.notes.iter().find(|note| note.id == id) {
            self.edit_buffer = note.value.clone();
            self.editing_id = Some(note.id.clone());
        }
    }

    /// Leaves edit mode, replacing the target's value with the trimmed edit
    /// buffer when that buffer is non-empty.
    ///
    /// An empty buffer discards the edit and keeps the stored value. The
    /// cursor and buffer are cleared on every path. Returns whether a value
    /// was replaced.
    pub fn commit_edit(&mut self) -> bool {
        let Some(target) = self.editing_id.take() else {
            self.edit_buffer.clear();
            return false;
        };
        let trimmed = std::mem::take(&mut self.edit_buffer);
        let trimmed = trimmed.trim();
        if trimmed.is_empty() {
            return false;
        }
        match self.notes.iter_mut().find(|note| note.id == target) {
            Some(note) => {
                note.value = trimmed.to_string();
                true
            }
            // Unreachable while delete clears the cursor, but degrade rather
            // than panic if that ever drifts.
            None => false,
        }
    }

    /// Removes the note with `id`, if present.
    ///
    /// Deleting the note under edit also clears the edit state. An absent id
    /// is a no-op, not an error. Returns whether the list changed.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.notes.len();
        self.notes.retain(|note| note.id != id);
        if self.editing_id.as_deref() == Some(id) {
            self.editing_id = None;
            self.edit_buffer.clear();
        }
        self.notes.len() != before
    }
}
