use std::sync::{Mutex, MutexGuard, PoisonError};

use campus_model::Resource;
use campus_types::ResourceKey;
use tracing::debug;

use crate::{RecordStore, StorageError, StorageResult};

/// In-process store for a single entity type.
///
/// Records are kept in a vector so scans return insertion order.
pub struct MemoryStore<R: Resource> {
    state: Mutex<MemoryState<R>>,
}

struct MemoryState<R> {
    rows: Vec<R>,
    last_id: i64,
}

impl<R: Resource> MemoryStore<R> {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            state: Mutex::new(MemoryState {
                rows: Vec::new(),
                last_id: 0,
            }),
        }
    }

    /// Creates a store pre-populated with records, saved in order.
    pub fn with_records(records: impl IntoIterator<Item = R>) -> StorageResult<Self> {
        let store = Self::new();
        for record in records {
            store.save(record)?;
        }
        Ok(store)
    }

    /// Returns the number of stored records.
    pub fn len(&self) -> usize {
        self.lock().rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, MemoryState<R>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<R: Resource> Default for MemoryStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Resource> RecordStore<R> for MemoryStore<R> {
    fn find_all(&self) -> StorageResult<Vec<R>> {
        Ok(self.lock().rows.clone())
    }

    fn find_by_id(&self, key: &R::Key) -> StorageResult<Option<R>> {
        Ok(self.lock().rows.iter().find(|r| r.key() == key).cloned())
    }

    fn save(&self, mut record: R) -> StorageResult<R> {
        let mut state = self.lock();

        if !record.key().is_assigned() {
            let next = state.last_id + 1;
            let key = R::Key::from_sequence(next)
                .ok_or(StorageError::MissingKey { entity: R::name() })?;
            state.last_id = next;
            record.set_key(key);
        } else if let Some(value) = record.key().sequence_value() {
            state.last_id = state.last_id.max(value);
        }

        match state.rows.iter_mut().find(|r| r.key() == record.key()) {
            Some(slot) => *slot = record.clone(),
            None => state.rows.push(record.clone()),
        }
        debug!(entity = R::name(), key = %record.key(), "saved record in memory");
        Ok(record)
    }

    fn delete(&self, record: &R) -> StorageResult<()> {
        self.lock().rows.retain(|r| r.key() != record.key());
        Ok(())
    }
}
