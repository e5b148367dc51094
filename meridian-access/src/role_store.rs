//! User → role assignment store.

use std::collections::HashMap;

use parking_lot::RwLock;
use tracing::error;

use crate::role_registry::RoleRegistry;
use crate::types::Role;

/// Mutable principal → role map. A missing entry means `guest`, never a
/// lookup failure.
pub struct UserRoleStore {
    assignments: RwLock<HashMap<String, Role>>,
}

impl UserRoleStore {
    pub fn new() -> Self {
        Self {
            assignments: RwLock::new(HashMap::new()),
        }
    }

    /// Overwrite any prior assignment (last write wins). An unknown role name
    /// leaves the store unchanged and returns false.
    pub fn assign(&self, user_id: &str, role_name: &str, registry: &RoleRegistry) -> bool {
        let role = match Role::parse(role_name) {
            Some(r) => r,
            None => {
                error!(user = %user_id, role = %role_name, "Role assignment rejected: unknown role");
                return false;
            }
        };
        if registry.lookup(role).is_none() {
            error!(user = %user_id, role = %role_name, "Role assignment rejected: role not in catalog");
            return false;
        }
        self.assignments.write().insert(user_id.to_string(), role);
        true
    }

    /// Assigned role, or `Guest` when none exists. Never fails.
    pub fn resolve(&self, user_id: &str) -> Role {
        self.assignments
            .read()
            .get(user_id)
            .copied()
            .unwrap_or(Role::Guest)
    }

    pub fn assigned_count(&self) -> usize {
        self.assignments.read().len()
    }
}

impl Default for UserRoleStore {
    fn default() -> Self {
        Self::new()
    }
}
