//! Debounced write-through of the note list.
//!
//! # Responsibility
//! - Coalesce rapid list changes into one storage write per quiet period.
//! - Keep storage I/O off the mutation path; callers never block.
//!
//! # Invariants
//! - The worker holds at most one pending list; each scheduled list replaces
//!   it and restarts the debounce window.
//! - Only the list that outlives an uninterrupted window is written.
//! - A write failure is logged and dropped; the in-memory list stays the
//!   source of truth.
//! - Dropping the saver flushes a still-pending list before the worker
//!   exits.

use super::{save_notes, PersistConfig};
use crate::model::note::Note;
use crate::storage::KeyValueStorage;
use log::{info, warn};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Instant;

enum Command {
    Save(Vec<Note>),
    Shutdown,
}

/// Handle to the background save worker.
///
/// The worker owns the storage exclusively; after startup there is exactly
/// one writer for the storage key.
pub struct DebouncedSaver {
    tx: Sender<Command>,
    worker: Option<JoinHandle<()>>,
}

impl DebouncedSaver {
    /// Moves `storage` onto a worker thread and starts the debounce loop.
    pub fn spawn<S>(storage: S, config: PersistConfig) -> Self
    where
        S: KeyValueStorage + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();
        let worker = thread::spawn(move || run_worker(storage, config, rx));
        Self {
            tx,
            worker: Some(worker),
        }
    }

    /// Hands the latest full list to the worker, restarting the debounce
    /// window.
    ///
    /// Fire-and-forget: never blocks, never reports failure to the caller.
    pub fn schedule(&self, notes: Vec<Note>) {
        if self.tx.send(Command::Save(notes)).is_err() {
            // Worker already gone; nothing to do but note it.
            warn!("event=notes_save module=persist status=error error_code=saver_stopped");
        }
    }
}

impl Drop for DebouncedSaver {
    fn drop(&mut self) {
        let _ = self.tx.send(Command::Shutdown);
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

fn run_worker<S: KeyValueStorage>(mut storage: S, config: PersistConfig, rx: Receiver<Command>) {
    let mut pending: Option<Vec<Note>> = None;
    loop {
        let command = if pending.is_none() {
            match rx.recv() {
                Ok(command) => command,
                Err(_) => break,
            }
        } else {
            // recv_timeout restarts the full window on every iteration, so
            // the quiet period is measured from the most recent change.
            match rx.recv_timeout(config.debounce) {
                Ok(command) => command,
                Err(RecvTimeoutError::Timeout) => {
                    flush(&mut storage, &config.storage_key, &mut pending);
                    continue;
                }
                Err(RecvTimeoutError::Disconnected) => break,
            }
        };
        match command {
            Command::Save(notes) => pending = Some(notes),
            Command::Shutdown => break,
        }
    }
    flush(&mut storage, &config.storage_key, &mut pending);
}

fn flush<S: KeyValueStorage>(storage: &mut S, key: &str, pending: &mut Option<Vec<Note>>) {
    let notes = match pending.take() {
        Some(notes) => notes,
        None => return,
    };
    let started_at = Instant::now();
    match save_notes(storage, key, &notes) {
        Ok(()) => info!(
            "event=notes_save module=persist status=ok count={} duration_ms={}",
            notes.len(),
            started_at.elapsed().as_millis()
        ),
        Err(err) => warn!(
            "event=notes_save module=persist status=error duration_ms={} error_code=save_failed error={}",
            started_at.elapsed().as_millis(),
            err
        ),
    }
}
