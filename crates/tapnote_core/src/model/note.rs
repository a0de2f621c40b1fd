//! Note domain model and id generation.
//!
//! # Responsibility
//! - Define the canonical note record and its serialized shape.
//! - Issue unique, monotonically increasing note ids.
//!
//! # Invariants
//! - `id` is stable and never reused for another note.
//! - Ids issued by one process are strictly increasing, even when the clock
//!   reads the same millisecond twice or steps backwards.
//! - Serialized field order is `id`, then `value`.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Stable identifier for one note.
///
/// Kept as a type alias to make semantic intent explicit in signatures. The
/// value is the decimal rendering of an epoch-milliseconds reading, bumped
/// past the last issued id when readings collide.
pub type NoteId = String;

/// One user entry on the note board.
///
/// The struct field order is the wire order; `Vec<Note>` serialized with
/// serde_json is the exact payload stored under the notes storage key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Stable id assigned at creation time.
    pub id: NoteId,
    /// Trimmed, non-empty note text.
    pub value: String,
}

impl Note {
    /// Creates a note with a freshly issued id.
    ///
    /// The caller is responsible for trimming and rejecting empty input
    /// before construction; the store's mutation boundary does both.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            id: next_note_id(),
            value: value.into(),
        }
    }

    /// Creates a note with a caller-provided id.
    ///
    /// Used when identity already exists, e.g. records restored from
    /// storage or fixtures in tests.
    pub fn with_id(id: impl Into<NoteId>, value: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            value: value.into(),
        }
    }
}

static LAST_ISSUED_MS: AtomicI64 = AtomicI64::new(0);

/// Issues the next note id.
///
/// # Invariants
/// - Strictly greater than every id issued before it in this process.
/// - Tracks wall-clock epoch milliseconds whenever the clock is ahead of the
///   last issued value.
pub fn next_note_id() -> NoteId {
    let now_ms = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0);

    let mut last = LAST_ISSUED_MS.load(Ordering::Relaxed);
    loop {
        let candidate = now_ms.max(last + 1);
        match LAST_ISSUED_MS.compare_exchange(last, candidate, Ordering::SeqCst, Ordering::Relaxed)
        {
            Ok(_) => return candidate.to_string(),
            Err(observed) => last = observed,
        }
    }
}
