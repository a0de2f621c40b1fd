//! In-memory key-value storage.
//!
//! # Responsibility
//! - Provide an ephemeral [`KeyValueStorage`] backend for tests and for
//!   embedders that opt out of durability.
//!
//! # Invariants
//! - Clones share one underlying map: the debounced saver takes ownership of
//!   its storage, so observers keep a clone and see the worker's writes.

use super::{KeyValueStorage, StorageResult};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Shared-handle map-backed storage. Never fails.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<String, String>> {
        // A panic in another holder leaves plain data behind; keep serving it.
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&mut self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries().get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.entries().insert(key.to_string(), value.to_string());
        Ok(())
    }
}
