//! Record stores for the campus API.
//!
//! A record store is the only shared mutable resource behind an endpoint
//! set. It offers a bulk scan, a key lookup, an upsert and a delete, and
//! owns key assignment for synthetic ids.
//!
//! # Implementations
//!
//! - [`MemoryStore`] keeps one entity type in process memory
//! - [`SqliteStore`] keeps every entity type in a single SQLite file as
//!   JSON rows keyed by `(entity_type, record_key)`
//!
//! Both preserve insertion order on scans and keep a record's position when
//! it is saved again under the same key.

mod error;
mod memory;
mod sqlite;

pub use error::{StorageError, StorageResult};
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use campus_model::Resource;

/// Keyed storage for one entity type.
pub trait RecordStore<R: Resource>: Send + Sync {
    /// Returns every stored record in insertion order.
    fn find_all(&self) -> StorageResult<Vec<R>>;

    /// Looks up one record by key.
    fn find_by_id(&self, key: &R::Key) -> StorageResult<Option<R>>;

    /// Inserts or replaces a record and returns it as stored.
    ///
    /// An unassigned synthetic key is replaced by the next value of the
    /// entity's sequence.
    fn save(&self, record: R) -> StorageResult<R>;

    /// Removes a record. Removing an absent record is a no-op.
    fn delete(&self, record: &R) -> StorageResult<()>;
}
