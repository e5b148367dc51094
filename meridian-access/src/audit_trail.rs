//! Bounded decision audit trail.
//!
//! Entry order reflects the order appends commit under the lock, not the
//! order the originating checks were issued; concurrent callers racing to
//! decide-then-append may interleave their commits in any order.

use std::sync::atomic::{AtomicU64, Ordering};

use meridian_core::BoundedLog;
use parking_lot::RwLock;

use crate::types::AuditEntry;

pub struct AuditTrail {
    entries: RwLock<BoundedLog<AuditEntry>>,
    total_granted: AtomicU64,
    total_denied: AtomicU64,
}

impl AuditTrail {
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: RwLock::new(BoundedLog::new(max_entries)),
            total_granted: AtomicU64::new(0),
            total_denied: AtomicU64::new(0),
        }
    }

    /// Tail insert; evicts the oldest entry when the bound is reached.
    pub fn append(&self, entry: AuditEntry) {
        if entry.granted {
            self.total_granted.fetch_add(1, Ordering::Relaxed);
        } else {
            self.total_denied.fetch_add(1, Ordering::Relaxed);
        }
        self.entries.write().push(entry);
    }

    /// Up to `limit` most recent entries, newest first, optionally filtered
    /// to one user.
    pub fn query(&self, user_id: Option<&str>, limit: usize) -> Vec<AuditEntry> {
        self.entries
            .read()
            .iter()
            .rev()
            .filter(|e| user_id.map_or(true, |u| e.user_id == u))
            .take(limit)
            .cloned()
            .collect()
    }

    /// Up to `limit` most recent denied entries, newest first.
    pub fn query_denied(&self, limit: usize) -> Vec<AuditEntry> {
        self.entries
            .read()
            .iter()
            .rev()
            .filter(|e| !e.granted)
            .take(limit)
            .cloned()
            .collect()
    }

    /// Full retained trail, oldest first.
    pub fn entries(&self) -> Vec<AuditEntry> {
        self.entries.read().to_vec()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Clearing is not itself recorded in the trail.
    pub fn clear(&self) {
        self.entries.write().clear();
    }

    pub fn total_granted(&self) -> u64 {
        self.total_granted.load(Ordering::Relaxed)
    }

    pub fn total_denied(&self) -> u64 {
        self.total_denied.load(Ordering::Relaxed)
    }
}
