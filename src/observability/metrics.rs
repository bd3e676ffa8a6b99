//! Store operation counters
//!
//! - Counters only, monotonic
//! - Reset only on process start
//! - Relaxed atomics; counters are advisory and never read under the store lock

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Counters for every store operation outcome
#[derive(Debug, Default)]
pub struct StoreMetrics {
    reads: AtomicU64,
    lists: AtomicU64,
    inserts: AtomicU64,
    updates: AtomicU64,
    deletes: AtomicU64,
    not_found: AtomicU64,
}

impl StoreMetrics {
    /// Create a registry with all counters at zero
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_reads(&self) {
        self.reads.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_lists(&self) {
        self.lists.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_inserts(&self) {
        self.inserts.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_updates(&self) {
        self.updates.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_deletes(&self) {
        self.deletes.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_not_found(&self) {
        self.not_found.fetch_add(1, Ordering::Relaxed);
    }

    /// Point-in-time copy of all counters
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            reads: self.reads.load(Ordering::Relaxed),
            lists: self.lists.load(Ordering::Relaxed),
            inserts: self.inserts.load(Ordering::Relaxed),
            updates: self.updates.load(Ordering::Relaxed),
            deletes: self.deletes.load(Ordering::Relaxed),
            not_found: self.not_found.load(Ordering::Relaxed),
        }
    }
}

/// Serializable counter values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct MetricsSnapshot {
    pub reads: u64,
    pub lists: u64,
    pub inserts: u64,
    pub updates: u64,
    pub deletes: u64,
    pub not_found: u64,
}

impl MetricsSnapshot {
    /// Total upserts, whether they inserted or updated
    pub fn upserts(&self) -> u64 {
        self.inserts + self.updates
    }
}
