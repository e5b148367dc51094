//! Read-only audit export for reporting.

use std::sync::Arc;

use crate::audit_trail::AuditTrail;
use crate::statistics::StatisticsAggregator;
use crate::types::AuditExport;

pub struct ExportService {
    trail: Arc<AuditTrail>,
}

impl ExportService {
    pub fn new(trail: Arc<AuditTrail>) -> Self {
        Self { trail }
    }

    /// Snapshot of the full retained trail plus its statistics, computed from
    /// the same read so records and stats always agree. Never mutates state.
    pub fn snapshot(&self) -> AuditExport {
        let records = self.trail.entries();
        let stats = StatisticsAggregator::compute_from(&records);
        AuditExport {
            exported_at: chrono::Utc::now().timestamp(),
            total_records: records.len(),
            records,
            stats,
        }
    }
}
