//! SQLite-backed key-value storage.
//!
//! # Responsibility
//! - Open file or in-memory SQLite connections for the kv table.
//! - Configure connection pragmas and apply the schema before use.
//!
//! # Invariants
//! - Returned stores have `foreign_keys=ON` and a busy timeout configured.
//! - The schema version is mirrored to `PRAGMA user_version`; databases
//!   written by a newer schema are rejected instead of silently read.

use super::{KeyValueStorage, StorageError, StorageResult};
use log::{error, info};
use rusqlite::{params, Connection};
use std::path::Path;
use std::time::{Duration, Instant};

const KV_SCHEMA_VERSION: u32 = 1;
const KV_INIT_SQL: &str = "CREATE TABLE IF NOT EXISTS kv (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
);";

/// Durable [`KeyValueStorage`] over a single SQLite table.
#[derive(Debug)]
pub struct SqliteKeyValueStorage {
    conn: Connection,
}

impl SqliteKeyValueStorage {
    /// Opens a database file and prepares the kv schema.
    ///
    /// # Side effects
    /// - Emits `kv_open` logging events with duration and status.
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let started_at = Instant::now();
        info!("event=kv_open module=storage status=start mode=file");
        let conn = Connection::open(path).map_err(|err| {
            log_open_failure("file", started_at, "kv_open_failed", &err);
            StorageError::from(err)
        })?;
        Self::from_connection(conn, "file", started_at)
    }

    /// Opens an in-memory database and prepares the kv schema.
    ///
    /// # Side effects
    /// - Emits `kv_open` logging events with duration and status.
    pub fn open_in_memory() -> StorageResult<Self> {
        let started_at = Instant::now();
        info!("event=kv_open module=storage status=start mode=memory");
        let conn = Connection::open_in_memory().map_err(|err| {
            log_open_failure("memory", started_at, "kv_open_failed", &err);
            StorageError::from(err)
        })?;
        Self::from_connection(conn, "memory", started_at)
    }

    fn from_connection(
        conn: Connection,
        mode: &str,
        started_at: Instant,
    ) -> StorageResult<Self> {
        match bootstrap_connection(&conn) {
            Ok(()) => {
                info!(
                    "event=kv_open module=storage status=ok mode={} duration_ms={}",
                    mode,
                    started_at.elapsed().as_millis()
                );
                Ok(Self { conn })
            }
            Err(err) => {
                error!(
                    "event=kv_open module=storage status=error mode={} duration_ms={} error_code=kv_bootstrap_failed error={}",
                    mode,
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err)
            }
        }
    }
}

impl KeyValueStorage for SqliteKeyValueStorage {
    fn get(&mut self, key: &str) -> StorageResult<Option<String>> {
        let mut stmt = self.conn.prepare("SELECT value FROM kv WHERE key = ?1;")?;
        let mut rows = stmt.query([key])?;
        match rows.next()? {
            Some(row) => Ok(Some(row.get(0)?)),
            None => Ok(None),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value;",
            params![key, value],
        )?;
        Ok(())
    }
}

fn bootstrap_connection(conn: &Connection) -> StorageResult<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(Duration::from_secs(5))?;
    apply_schema(conn)?;
    Ok(())
}

fn apply_schema(conn: &Connection) -> StorageResult<()> {
    let db_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    if db_version > KV_SCHEMA_VERSION {
        return Err(StorageError::UnsupportedSchemaVersion {
            db_version,
            latest_supported: KV_SCHEMA_VERSION,
        });
    }
    if db_version == KV_SCHEMA_VERSION {
        return Ok(());
    }
    conn.execute_batch(KV_INIT_SQL)?;
    conn.pragma_update(None, "user_version", KV_SCHEMA_VERSION)?;
    Ok(())
}

fn log_open_failure(mode: &str, started_at: Instant, error_code: &str, err: &rusqlite::Error) {
    error!(
        "event=kv_open module=storage status=error mode={} duration_ms={} error_code={} error={}",
        mode,
        started_at.elapsed().as_millis(),
        error_code,
        err
    );
}
