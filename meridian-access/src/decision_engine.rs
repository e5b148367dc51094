//! Decision Engine — policy core of the Access Control Layer.
//!
//! Evaluates (module, action) and (resource, owner) requests against the
//! role catalog and records every decision in the bounded audit trail. One
//! engine instance is constructed at the composition root and shared by
//! request handlers; there is no process-global instance.
//!
//! Shared mutable state is limited to the role store's map and the trail's
//! buffer, each behind its own lock; role assignment and audit append are
//! never atomic with each other.

use std::collections::HashMap;
use std::sync::Arc;

use meridian_core::{AccessConfig, CoreResult};
use tracing::{error, warn};

use crate::audit_trail::AuditTrail;
use crate::export::ExportService;
use crate::membership::{CourseMembership, OpenCourseMembership};
use crate::role_registry::RoleRegistry;
use crate::role_store::UserRoleStore;
use crate::statistics::StatisticsAggregator;
use crate::types::{
    AccessStats, Action, AuditEntry, AuditExport, DataAccessLevel, Decision, EngineReport,
    PermissionSet, Role,
};

pub struct DecisionEngine {
    registry: RoleRegistry,
    store: UserRoleStore,
    trail: Arc<AuditTrail>,
    stats: StatisticsAggregator,
    export: ExportService,
    membership: Arc<dyn CourseMembership>,
    audit_data_access: bool,
}

impl DecisionEngine {
    /// Fails only on invalid configuration (e.g. a zero audit capacity);
    /// composition aborts here rather than individual requests later.
    pub fn new(config: &AccessConfig) -> CoreResult<Self> {
        config.validate()?;
        let trail = Arc::new(AuditTrail::new(config.max_audit_entries));
        Ok(Self {
            registry: RoleRegistry::new(),
            store: UserRoleStore::new(),
            stats: StatisticsAggregator::new(trail.clone()),
            export: ExportService::new(trail.clone()),
            trail,
            membership: Arc::new(OpenCourseMembership),
            audit_data_access: config.audit_data_access,
        })
    }

    /// Replace the built-in catalog with one validated by
    /// [`RoleRegistry::from_catalog`].
    pub fn with_registry(mut self, registry: RoleRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Wire in a real enrollment check for the `course` data-access tier.
    pub fn with_membership(mut self, membership: Arc<dyn CourseMembership>) -> Self {
        self.membership = membership;
        self
    }

    /// Decide whether `user_id` may perform `action` inside `module`, and
    /// record the outcome. The decision is final before the audit entry is
    /// built; the trail never sees a placeholder outcome.
    pub fn can_perform_action(
        &self,
        user_id: &str,
        module: &str,
        action: Action,
        resource_id: Option<&str>,
    ) -> Decision {
        let role = self.store.resolve(user_id);
        let decision = self.evaluate_action(user_id, role, module, action);
        self.trail.append(AuditEntry {
            user_id: user_id.to_string(),
            role,
            module: module.to_string(),
            action,
            resource_id: resource_id.map(|r| r.to_string()),
            timestamp: chrono::Utc::now().timestamp(),
            granted: decision.granted,
            reason: decision.reason.clone(),
        });
        decision
    }

    fn evaluate_action(&self, user_id: &str, role: Role, module: &str, action: Action) -> Decision {
        let perms = match self.registry.lookup(role) {
            Some(p) => p,
            None => {
                error!(user = %user_id, role = %role, "Role missing from catalog");
                return Decision::denied("unknown role");
            }
        };
        // An unrecognized module string is an ordinary denial; this layer
        // keeps no canonical module catalog.
        if !perms.modules.allows(module) {
            warn!(user = %user_id, module = %module, "Access denied: module not accessible");
            return Decision::denied("Module not accessible");
        }
        if !perms.actions.contains(&action) {
            warn!(user = %user_id, module = %module, action = %action, "Access denied: action not permitted");
            return Decision::denied("Action not permitted");
        }
        Decision::granted(format!("{} can perform {}", role, action))
    }

    /// Decide whether `user_id` may read data owned by `resource_owner_id`.
    /// Tier order: system, then own, then course (via the membership
    /// collaborator).
    pub fn can_access_data(
        &self,
        user_id: &str,
        resource_type: &str,
        resource_owner_id: &str,
    ) -> bool {
        let role = self.store.resolve(user_id);
        let (granted, reason) =
            self.evaluate_data_access(user_id, role, resource_type, resource_owner_id);
        if !granted {
            warn!(user = %user_id, resource = %resource_type, "Data access denied");
        }
        if self.audit_data_access {
            self.trail.append(AuditEntry {
                user_id: user_id.to_string(),
                role,
                module: format!("data:{}", resource_type),
                action: Action::View,
                resource_id: Some(resource_owner_id.to_string()),
                timestamp: chrono::Utc::now().timestamp(),
                granted,
                reason: reason.to_string(),
            });
        }
        granted
    }

    fn evaluate_data_access(
        &self,
        user_id: &str,
        role: Role,
        resource_type: &str,
        resource_owner_id: &str,
    ) -> (bool, &'static str) {
        let perms = match self.registry.lookup(role) {
            Some(p) => p,
            None => {
                error!(user = %user_id, role = %role, "Role missing from catalog");
                return (false, "unknown role");
            }
        };
        let levels = &perms.data_access_levels;
        if levels.contains(&DataAccessLevel::System) {
            return (true, "system-wide access");
        }
        if levels.contains(&DataAccessLevel::Own) && user_id == resource_owner_id {
            return (true, "owner access");
        }
        if levels.contains(&DataAccessLevel::Course)
            && self
                .membership
                .is_member(user_id, resource_type, resource_owner_id)
        {
            return (true, "course-scope access");
        }
        (false, "data access not permitted")
    }

    /// Whether the caller's role may delegate roles to others. Hosts gate
    /// role assignment behind this.
    pub fn can_delegate(&self, user_id: &str) -> bool {
        self.registry
            .lookup(self.store.resolve(user_id))
            .map_or(false, |p| p.can_delegate)
    }

    pub fn assign_role(&self, user_id: &str, role_name: &str) -> bool {
        self.store.assign(user_id, role_name, &self.registry)
    }

    pub fn resolve_role(&self, user_id: &str) -> Role {
        self.store.resolve(user_id)
    }

    pub fn role_permissions(&self, role: Role) -> Option<&PermissionSet> {
        self.registry.lookup(role)
    }

    /// Permissions for a role arriving as an untrusted wire name.
    pub fn lookup_permissions(&self, role_name: &str) -> Option<&PermissionSet> {
        match Role::parse(role_name) {
            Some(role) => self.registry.lookup(role),
            None => {
                error!(role = %role_name, "Permission lookup rejected: unknown role");
                None
            }
        }
    }

    pub fn all_roles(&self) -> &HashMap<Role, PermissionSet> {
        self.registry.all()
    }

    pub fn query_audit(&self, user_id: Option<&str>, limit: usize) -> Vec<AuditEntry> {
        self.trail.query(user_id, limit)
    }

    pub fn query_denied(&self, limit: usize) -> Vec<AuditEntry> {
        self.trail.query_denied(limit)
    }

    pub fn compute_stats(&self) -> AccessStats {
        self.stats.compute()
    }

    pub fn snapshot(&self) -> AuditExport {
        self.export.snapshot()
    }

    pub fn clear_audit(&self) {
        self.trail.clear();
    }

    pub fn audit_len(&self) -> usize {
        self.trail.len()
    }

    pub fn report(&self) -> EngineReport {
        let granted = self.trail.total_granted();
        let denied = self.trail.total_denied();
        EngineReport {
            total_checks: granted + denied,
            total_granted: granted,
            total_denied: denied,
            assigned_users: self.store.assigned_count() as u64,
        }
    }
}
