//! Key-value storage boundary.
//!
//! # Responsibility
//! - Define the storage contract the persistence bridge consumes.
//! - Keep backend details (SQLite, in-memory) behind one seam.
//!
//! # Invariants
//! - `set` fully overwrites the value under a key; there are no partial
//!   writes.
//! - Both operations may fail independently of program logic; callers decide
//!   the failure policy.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStorage;
pub use sqlite::SqliteKeyValueStorage;

pub type StorageResult<T> = Result<T, StorageError>;

/// Transport-level failure of a storage backend.
#[derive(Debug)]
pub enum StorageError {
    Sqlite(rusqlite::Error),
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "storage schema version {db_version} is newer than supported {latest_supported}"
            ),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

/// Contract consumed by the persistence bridge.
///
/// One key holds one serialized value; reads and writes are whole-value.
pub trait KeyValueStorage {
    /// Returns the value stored under `key`, or `None` when absent.
    fn get(&mut self, key: &str) -> StorageResult<Option<String>>;
    /// Overwrites the value stored under `key`.
    fn set(&mut self, key: &str, value: &str) -> StorageResult<()>;
}
