//! Role Registry — immutable role → permission-set catalog.
//!
//! Policy data is fixed at construction so audit interpretation stays
//! deterministic; runtime policy mutation is out of scope for this layer.

use std::collections::{HashMap, HashSet};

use meridian_core::{CoreError, CoreResult};

use crate::types::{Action, DataAccessLevel, ModuleScope, PermissionSet, Role};

pub struct RoleRegistry {
    catalog: HashMap<Role, PermissionSet>,
}

impl RoleRegistry {
    /// Built-in five-role catalog.
    pub fn new() -> Self {
        let mut catalog = HashMap::new();

        catalog.insert(
            Role::Student,
            PermissionSet {
                modules: specific(&[
                    "content_delivery",
                    "progress_tracking",
                    "gamification",
                    "ai_recommendations",
                ]),
                actions: HashSet::from([Action::View, Action::Interact, Action::TrackProgress]),
                data_access_levels: HashSet::from([DataAccessLevel::Own]),
                max_managed_resources: None,
                can_delegate: false,
            },
        );

        catalog.insert(
            Role::Instructor,
            PermissionSet {
                modules: specific(&[
                    "course_management",
                    "content_delivery",
                    "student_management",
                    "analytics",
                ]),
                actions: HashSet::from([
                    Action::View,
                    Action::Create,
                    Action::Update,
                    Action::Manage,
                    Action::Analyze,
                    Action::GenerateReports,
                ]),
                data_access_levels: HashSet::from([DataAccessLevel::Own, DataAccessLevel::Course]),
                max_managed_resources: Some(50),
                can_delegate: false,
            },
        );

        catalog.insert(
            Role::Admin,
            PermissionSet {
                modules: ModuleScope::All,
                actions: HashSet::from(Action::ALL),
                data_access_levels: HashSet::from([DataAccessLevel::System]),
                max_managed_resources: None,
                can_delegate: true,
            },
        );

        catalog.insert(
            Role::Support,
            PermissionSet {
                modules: specific(&["user_support", "troubleshooting", "content_delivery"]),
                actions: HashSet::from([Action::View, Action::Troubleshoot, Action::Update]),
                data_access_levels: HashSet::from([
                    DataAccessLevel::Own,
                    DataAccessLevel::Department,
                ]),
                max_managed_resources: None,
                can_delegate: false,
            },
        );

        catalog.insert(
            Role::Guest,
            PermissionSet {
                modules: specific(&["content_delivery"]),
                actions: HashSet::from([Action::View]),
                data_access_levels: HashSet::from([DataAccessLevel::None]),
                max_managed_resources: None,
                can_delegate: false,
            },
        );

        Self { catalog }
    }

    /// Build from a custom catalog. The catalog must cover every role;
    /// anything less aborts composition rather than failing per request.
    pub fn from_catalog(catalog: HashMap<Role, PermissionSet>) -> CoreResult<Self> {
        for role in Role::ALL {
            if !catalog.contains_key(&role) {
                return Err(CoreError::RegistryIncomplete {
                    role: role.to_string(),
                });
            }
        }
        Ok(Self { catalog })
    }

    /// `None` means a role value outside the catalog reached the engine, a
    /// configuration fault the caller resolves to a safe deny.
    pub fn lookup(&self, role: Role) -> Option<&PermissionSet> {
        self.catalog.get(&role)
    }

    /// Full role → permission-set table, for catalog/UI rendering.
    pub fn all(&self) -> &HashMap<Role, PermissionSet> {
        &self.catalog
    }
}

impl Default for RoleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn specific(modules: &[&str]) -> ModuleScope {
    ModuleScope::Specific(modules.iter().map(|m| m.to_string()).collect())
}
