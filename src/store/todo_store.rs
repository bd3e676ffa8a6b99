//! # Todo Store
//!
//! Concurrent in-memory mapping from id to [`Record`].
//!
//! # Locking
//!
//! - `get`, `list`, `len` take the shared lock; readers never block each other
//! - `upsert`, `delete` take the exclusive lock for the whole mutation
//! - Guards live only inside one method; nothing is logged or counted while
//!   a guard is held, and no method calls back into the store under a guard

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use parking_lot::RwLock;

use super::errors::{StoreError, StoreResult};
use super::record::Record;
use crate::observability::{Logger, StoreMetrics};

/// Thread-safe record store
///
/// Share it across request handlers behind an `Arc`. The map and its lock are
/// private; the four operations are the only way in.
#[derive(Debug, Default)]
pub struct TodoStore {
    records: RwLock<HashMap<String, Record>>,
    metrics: StoreMetrics,
}

impl TodoStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the record stored under `id`
    pub fn get(&self, id: &str) -> Option<Record> {
        let found = self.records.read().get(id).cloned();

        self.metrics.increment_reads();
        if found.is_none() {
            self.record_not_found("get", id);
        }
        found
    }

    /// Copy of every record, sorted by id
    ///
    /// The returned vector is owned by the caller; changing it has no effect
    /// on the store.
    pub fn list(&self) -> Vec<Record> {
        let mut snapshot: Vec<Record> = self.records.read().values().cloned().collect();
        snapshot.sort_by(|a, b| a.id.cmp(&b.id));

        self.metrics.increment_lists();
        snapshot
    }

    /// Insert a new record or replace `title` and `completed` of an existing one
    pub fn upsert(&self, id: &str, title: &str, completed: &str) -> Record {
        let (record, inserted) = {
            let mut records = self.records.write();
            match records.entry(id.to_string()) {
                Entry::Occupied(mut slot) => {
                    let existing = slot.get_mut();
                    existing.title = title.to_string();
                    existing.completed = completed.to_string();
                    (existing.clone(), false)
                }
                Entry::Vacant(slot) => {
                    let created = slot.insert(Record::new(id, title, completed));
                    (created.clone(), true)
                }
            }
        };

        if inserted {
            self.metrics.increment_inserts();
        } else {
            self.metrics.increment_updates();
        }
        Logger::trace(
            "STORE_UPSERT",
            &[("id", id), ("inserted", if inserted { "true" } else { "false" })],
        );
        record
    }

    /// Remove and return the record stored under `id`
    ///
    /// Deleting an absent id returns `None` and leaves the store untouched.
    pub fn delete(&self, id: &str) -> Option<Record> {
        let removed = self.records.write().remove(id);

        match removed {
            Some(_) => {
                self.metrics.increment_deletes();
                Logger::trace("STORE_DELETE", &[("id", id)]);
            }
            None => self.record_not_found("delete", id),
        }
        removed
    }

    /// Like [`get`](Self::get), but absence is a [`StoreError::NotFound`]
    pub fn fetch(&self, id: &str) -> StoreResult<Record> {
        self.get(id).ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// Like [`delete`](Self::delete), but absence is a [`StoreError::NotFound`]
    pub fn remove(&self, id: &str) -> StoreResult<Record> {
        self.delete(id).ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// Whether the store holds no records
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }

    /// Operation counters for this store
    pub fn metrics(&self) -> &StoreMetrics {
        &self.metrics
    }

    fn record_not_found(&self, op: &str, id: &str) {
        self.metrics.increment_not_found();
        Logger::trace("STORE_NOT_FOUND", &[("id", id), ("op", op)]);
    }
}
