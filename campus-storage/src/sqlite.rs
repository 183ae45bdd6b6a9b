use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use campus_model::Resource;
use campus_types::ResourceKey;
use rusqlite::{Connection, OptionalExtension, Transaction, params};
use tracing::debug;

use crate::{RecordStore, StorageError, StorageResult};

/// SQLite-backed store shared by every entity type.
///
/// Rows hold the record's JSON form; scans order by rowid, which an upsert
/// leaves untouched.
#[derive(Clone)]
pub struct SqliteStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteStore {
    /// Opens (or creates) a store at the given path.
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                StorageError::InvalidData(format!("cannot create {}: {e}", parent.display()))
            })?;
        }
        Self::from_connection(Connection::open(path)?)
    }

    /// Opens an in-memory store (for testing).
    pub fn open_in_memory() -> StorageResult<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> StorageResult<Self> {
        let store = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> StorageResult<()> {
        self.lock().execute_batch(
            "
            CREATE TABLE IF NOT EXISTS records (
                entity_type TEXT NOT NULL,
                record_key TEXT NOT NULL,
                data TEXT NOT NULL,
                PRIMARY KEY (entity_type, record_key)
            );

            CREATE TABLE IF NOT EXISTS key_sequences (
                entity_type TEXT PRIMARY KEY,
                last_value INTEGER NOT NULL
            );
            ",
        )?;
        Ok(())
    }

    fn lock(&self) -> MutexGuard<'_, Connection> {
        self.conn.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn next_sequence(tx: &Transaction<'_>, entity: &str) -> StorageResult<i64> {
        tx.execute(
            "INSERT INTO key_sequences (entity_type, last_value) VALUES (?1, 1)
             ON CONFLICT(entity_type) DO UPDATE SET last_value = last_value + 1",
            params![entity],
        )?;
        let value = tx.query_row(
            "SELECT last_value FROM key_sequences WHERE entity_type = ?1",
            params![entity],
            |row| row.get(0),
        )?;
        Ok(value)
    }

    fn claim_sequence(tx: &Transaction<'_>, entity: &str, value: i64) -> StorageResult<()> {
        tx.execute(
            "INSERT INTO key_sequences (entity_type, last_value) VALUES (?1, ?2)
             ON CONFLICT(entity_type)
             DO UPDATE SET last_value = MAX(last_value, excluded.last_value)",
            params![entity, value],
        )?;
        Ok(())
    }
}

impl<R: Resource> RecordStore<R> for SqliteStore {
    fn find_all(&self) -> StorageResult<Vec<R>> {
        let conn = self.lock();
        let mut stmt =
            conn.prepare("SELECT data FROM records WHERE entity_type = ?1 ORDER BY rowid")?;
        let rows = stmt.query_map(params![R::name()], |row| row.get::<_, String>(0))?;

        let mut records = Vec::new();
        for data in rows {
            records.push(serde_json::from_str(&data?)?);
        }
        Ok(records)
    }

    fn find_by_id(&self, key: &R::Key) -> StorageResult<Option<R>> {
        let data: Option<String> = self
            .lock()
            .query_row(
                "SELECT data FROM records WHERE entity_type = ?1 AND record_key = ?2",
                params![R::name(), key.to_string()],
                |row| row.get(0),
            )
            .optional()?;

        match data {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    fn save(&self, mut record: R) -> StorageResult<R> {
        let mut conn = self.lock();
        let tx = conn.transaction()?;

        if !record.key().is_assigned() {
            let next = Self::next_sequence(&tx, R::name())?;
            let key = R::Key::from_sequence(next)
                .ok_or(StorageError::MissingKey { entity: R::name() })?;
            record.set_key(key);
        } else if let Some(value) = record.key().sequence_value() {
            Self::claim_sequence(&tx, R::name(), value)?;
        }

        let data = serde_json::to_string(&record)?;
        tx.execute(
            "INSERT INTO records (entity_type, record_key, data) VALUES (?1, ?2, ?3)
             ON CONFLICT(entity_type, record_key) DO UPDATE SET data = excluded.data",
            params![R::name(), record.key().to_string(), data],
        )?;
        tx.commit()?;

        debug!(entity = R::name(), key = %record.key(), "saved record in sqlite");
        Ok(record)
    }

    fn delete(&self, record: &R) -> StorageResult<()> {
        self.lock().execute(
            "DELETE FROM records WHERE entity_type = ?1 AND record_key = ?2",
            params![R::name(), record.key().to_string()],
        )?;
        Ok(())
    }
}
