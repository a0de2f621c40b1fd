//! Domain model for the note board.
//!
//! # Responsibility
//! - Define the canonical note record shared by store, persistence and UI.
//!
//! # Invariants
//! - Every note is identified by a stable `NoteId` that is never reused.
//! - Deletion is a hard removal from the list; there are no tombstones.

pub mod note;
