//! Record storage interface and the in-memory implementation.

use crate::error::{MetadataError, Result};
use crate::records::{FeedbackRecord, MetadataRecord, RegistrationRecord};
use erc8004_core::ContentKey;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

/// Key-value persistence for one record type.
///
/// `insert_if_absent` must be atomic per key: of two concurrent inserts for
/// the same key exactly one returns `true`.
pub trait RecordStore<R: MetadataRecord>: Send + Sync {
    fn load(&self, key: &ContentKey) -> Result<Option<R>>;

    /// Store `record` unless its key is taken. Returns whether it was written.
    fn insert_if_absent(&self, record: R) -> Result<bool>;
}

impl<R, S> RecordStore<R> for Arc<S>
where
    R: MetadataRecord,
    S: RecordStore<R> + ?Sized,
{
    fn load(&self, key: &ContentKey) -> Result<Option<R>> {
        (**self).load(key)
    }

    fn insert_if_absent(&self, record: R) -> Result<bool> {
        (**self).insert_if_absent(record)
    }
}

/// Store backend that holds both record kinds, usable behind one trait object.
pub trait MetadataStore: RecordStore<RegistrationRecord> + RecordStore<FeedbackRecord> {}

impl<T> MetadataStore for T where
    T: RecordStore<RegistrationRecord> + RecordStore<FeedbackRecord>
{
}

#[derive(Debug, Default)]
struct Records {
    registrations: HashMap<ContentKey, RegistrationRecord>,
    feedback: HashMap<ContentKey, FeedbackRecord>,
}

#[derive(Debug, Default)]
pub struct InMemoryMetadataStore {
    records: Mutex<Records>,
}

impl InMemoryMetadataStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Records>> {
        self.records.lock().map_err(|_| MetadataError::LockPoisoned)
    }

    /// Snapshot of stored registration records, ordered by key.
    pub fn registrations(&self) -> Result<Vec<RegistrationRecord>> {
        let mut records: Vec<_> = self.lock()?.registrations.values().cloned().collect();
        records.sort_by(|a, b| a.key.cmp(&b.key));
        Ok(records)
    }

    /// Snapshot of stored feedback records, ordered by key.
    pub fn feedback(&self) -> Result<Vec<FeedbackRecord>> {
        let mut records: Vec<_> = self.lock()?.feedback.values().cloned().collect();
        records.sort_by(|a, b| a.key.cmp(&b.key));
        Ok(records)
    }
}

macro_rules! impl_in_memory_store {
    ($record:ty, $table:ident) => {
        impl RecordStore<$record> for InMemoryMetadataStore {
            fn load(&self, key: &ContentKey) -> Result<Option<$record>> {
                Ok(self.lock()?.$table.get(key).cloned())
            }

            fn insert_if_absent(&self, record: $record) -> Result<bool> {
                let mut records = self.lock()?;
                if records.$table.contains_key(record.key()) {
                    return Ok(false);
                }
                records.$table.insert(record.key().clone(), record);
                Ok(true)
            }
        }
    };
}

impl_in_memory_store!(RegistrationRecord, registrations);
impl_in_memory_store!(FeedbackRecord, feedback);
