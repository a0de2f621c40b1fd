//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `tapnote_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use tapnote_core::{MemoryStorage, NotesService, PersistConfig};

fn main() {
    println!("tapnote_core version={}", tapnote_core::core_version());

    // End-to-end probe against ephemeral storage; exercises load, the store
    // and the debounced saver without touching the filesystem.
    let mut board = NotesService::open(MemoryStorage::new(), PersistConfig::default());
    board.add("smoke note");
    println!("tapnote_core notes={}", board.notes().len());
}
