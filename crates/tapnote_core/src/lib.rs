//! Core state loop for a single-screen, locally persisted note board.
//! This crate is the single source of truth for note-list invariants.

pub mod logging;
pub mod model;
pub mod persist;
pub mod service;
pub mod storage;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::note::{next_note_id, Note, NoteId};
pub use persist::{
    decode_notes, encode_notes, load_notes, save_notes, DebouncedSaver, PersistCause,
    PersistConfig, PersistError, PersistResult, DEFAULT_DEBOUNCE, NOTES_STORAGE_KEY,
};
pub use service::notes_service::NotesService;
pub use storage::{
    KeyValueStorage, MemoryStorage, SqliteKeyValueStorage, StorageError, StorageResult,
};
pub use store::NoteStore;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
