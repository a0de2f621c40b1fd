//! Persistence bridge between the note store and key-value storage.
//!
//! # Responsibility
//! - Encode/decode the full note list to its JSON wire shape.
//! - Load the stored list once at startup, degrading every failure to the
//!   empty list.
//! - Write the full list under the fixed storage key.
//!
//! # Invariants
//! - The list is the unit of persistence; every write overwrites the whole
//!   value, never a delta.
//! - Load and save failures are non-fatal: they are logged at this boundary
//!   and never surfaced to the user-facing flow.

use crate::model::note::Note;
use crate::storage::{KeyValueStorage, StorageError};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::{Duration, Instant};

pub mod saver;

pub use saver::DebouncedSaver;

/// Fixed key the whole note list is persisted under.
pub const NOTES_STORAGE_KEY: &str = "@notes_app";

/// Quiet period a burst of changes must outlast before a write lands.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Persistence settings owned by the embedder.
#[derive(Debug, Clone)]
pub struct PersistConfig {
    /// Storage key the serialized list lives under.
    pub storage_key: String,
    /// Debounce window for coalescing rapid changes into one write.
    pub debounce: Duration,
}

impl Default for PersistConfig {
    fn default() -> Self {
        Self {
            storage_key: NOTES_STORAGE_KEY.to_string(),
            debounce: DEFAULT_DEBOUNCE,
        }
    }
}

pub type PersistResult<T> = Result<T, PersistError>;

/// Underlying cause of a load or save failure.
#[derive(Debug)]
pub enum PersistCause {
    /// The storage backend failed.
    Storage(StorageError),
    /// The stored value did not parse, or the list did not encode.
    Codec(serde_json::Error),
}

impl Display for PersistCause {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Storage(err) => write!(f, "{err}"),
            Self::Codec(err) => write!(f, "{err}"),
        }
    }
}

impl Error for PersistCause {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            Self::Codec(err) => Some(err),
        }
    }
}

/// The two failure kinds the persistence bridge knows.
///
/// Both are best-effort by policy: caught at this boundary, logged, and
/// answered with the best available in-memory state.
#[derive(Debug)]
pub enum PersistError {
    /// Storage unreadable or stored value unparsable.
    Load(PersistCause),
    /// List unserializable or storage unwritable.
    Save(PersistCause),
}

impl Display for PersistError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Load(cause) => write!(f, "failed to load notes: {cause}"),
            Self::Save(cause) => write!(f, "failed to save notes: {cause}"),
        }
    }
}

impl Error for PersistError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Load(cause) | Self::Save(cause) => Some(cause),
        }
    }
}

/// Encodes the list to its wire shape.
pub fn encode_notes(notes: &[Note]) -> Result<String, serde_json::Error> {
    serde_json::to_string(notes)
}

/// Decodes a stored wire value back into a list.
pub fn decode_notes(raw: &str) -> Result<Vec<Note>, serde_json::Error> {
    serde_json::from_str(raw)
}

/// Loads the stored note list, or the empty list when nothing usable is
/// stored.
///
/// Invoked once at startup, before the debounced save path exists. An absent
/// key is the empty list; a read or parse failure is logged as a non-fatal
/// diagnostic and also answered with the empty list.
///
/// # Side effects
/// - Emits `notes_load` logging events with duration and status.
pub fn load_notes<S: KeyValueStorage>(storage: &mut S, key: &str) -> Vec<Note> {
    let started_at = Instant::now();
    match try_load(storage, key) {
        Ok(notes) => {
            info!(
                "event=notes_load module=persist status=ok count={} duration_ms={}",
                notes.len(),
                started_at.elapsed().as_millis()
            );
            notes
        }
        Err(err) => {
            warn!(
                "event=notes_load module=persist status=error duration_ms={} error_code=load_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            Vec::new()
        }
    }
}

fn try_load<S: KeyValueStorage>(storage: &mut S, key: &str) -> PersistResult<Vec<Note>> {
    let stored = storage
        .get(key)
        .map_err(|err| PersistError::Load(PersistCause::Storage(err)))?;
    match stored {
        None => Ok(Vec::new()),
        Some(raw) => decode_notes(&raw).map_err(|err| PersistError::Load(PersistCause::Codec(err))),
    }
}

/// Writes the full list under `key`, overwriting the previous value.
pub fn save_notes<S: KeyValueStorage>(
    storage: &mut S,
    key: &str,
    notes: &[Note],
) -> PersistResult<()> {
    let encoded =
        encode_notes(notes).map_err(|err| PersistError::Save(PersistCause::Codec(err)))?;
    storage
        .set(key, &encoded)
        .map_err(|err| PersistError::Save(PersistCause::Storage(err)))
}
