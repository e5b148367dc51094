//! Single-pass grant/deny statistics over the audit trail.

use std::collections::HashMap;
use std::sync::Arc;

use crate::audit_trail::AuditTrail;
use crate::types::{AccessStats, AuditEntry};

pub struct StatisticsAggregator {
    trail: Arc<AuditTrail>,
}

impl StatisticsAggregator {
    pub fn new(trail: Arc<AuditTrail>) -> Self {
        Self { trail }
    }

    /// Aggregate the currently retained trail.
    pub fn compute(&self) -> AccessStats {
        Self::compute_from(&self.trail.entries())
    }

    /// One pass over a fixed set of entries. The denial breakdowns count only
    /// denied entries, keyed by role, module, and action names.
    pub fn compute_from(entries: &[AuditEntry]) -> AccessStats {
        let mut granted_count = 0u64;
        let mut denied_by_role: HashMap<String, u64> = HashMap::new();
        let mut denied_by_module: HashMap<String, u64> = HashMap::new();
        let mut denied_by_action: HashMap<String, u64> = HashMap::new();

        for entry in entries {
            if entry.granted {
                granted_count += 1;
            } else {
                *denied_by_role.entry(entry.role.to_string()).or_insert(0) += 1;
                *denied_by_module.entry(entry.module.clone()).or_insert(0) += 1;
                *denied_by_action.entry(entry.action.to_string()).or_insert(0) += 1;
            }
        }

        let total = entries.len() as u64;
        let denied_count = total - granted_count;
        let granted_percentage = if total == 0 {
            "0".to_string()
        } else {
            format!("{:.2}", granted_count as f64 / total as f64 * 100.0)
        };

        AccessStats {
            total,
            granted_count,
            denied_count,
            granted_percentage,
            denied_by_role,
            denied_by_module,
            denied_by_action,
        }
    }
}
