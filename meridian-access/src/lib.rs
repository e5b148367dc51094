//! # Meridian Access — Role-Based Access Control Layer
//!
//! Decides, for a given principal, whether a requested (module, action) or
//! (resource, owner) pair is permitted, and keeps a bounded, FIFO-evicting
//! audit trail of every decision for inspection and statistics.

pub mod audit_trail;
pub mod decision_engine;
pub mod export;
pub mod membership;
pub mod role_registry;
pub mod role_store;
pub mod statistics;
pub mod types;

pub use audit_trail::AuditTrail;
pub use decision_engine::DecisionEngine;
pub use export::ExportService;
pub use membership::{CourseMembership, OpenCourseMembership};
pub use role_registry::RoleRegistry;
pub use role_store::UserRoleStore;
pub use statistics::StatisticsAggregator;
pub use types::{
    AccessStats, Action, AuditEntry, AuditExport, DataAccessLevel, Decision, EngineReport,
    ModuleScope, PermissionSet, Role,
};
