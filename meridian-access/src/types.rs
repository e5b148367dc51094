//! Shared types for the Access Control Layer.

use std::collections::{HashMap, HashSet};

/// Principal tier. Every role maps to exactly one [`PermissionSet`] in the
/// role registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Student,
    Instructor,
    Admin,
    Support,
    Guest,
}

impl Role {
    /// Every role, in catalog order.
    pub const ALL: [Role; 5] = [
        Role::Student,
        Role::Instructor,
        Role::Admin,
        Role::Support,
        Role::Guest,
    ];

    /// Parse a wire name. Unknown names come from untrusted input and are a
    /// configuration fault the caller resolves to a deny, never a panic.
    pub fn parse(name: &str) -> Option<Role> {
        match name {
            "student" => Some(Role::Student),
            "instructor" => Some(Role::Instructor),
            "admin" => Some(Role::Admin),
            "support" => Some(Role::Support),
            "guest" => Some(Role::Guest),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Instructor => "instructor",
            Role::Admin => "admin",
            Role::Support => "support",
            Role::Guest => "guest",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Enumerated operation a principal may attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    View,
    Create,
    Update,
    Delete,
    Manage,
    Analyze,
    Interact,
    TrackProgress,
    Troubleshoot,
    GenerateReports,
}

impl Action {
    pub const ALL: [Action; 10] = [
        Action::View,
        Action::Create,
        Action::Update,
        Action::Delete,
        Action::Manage,
        Action::Analyze,
        Action::Interact,
        Action::TrackProgress,
        Action::Troubleshoot,
        Action::GenerateReports,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::View => "view",
            Action::Create => "create",
            Action::Update => "update",
            Action::Delete => "delete",
            Action::Manage => "manage",
            Action::Analyze => "analyze",
            Action::Interact => "interact",
            Action::TrackProgress => "track_progress",
            Action::Troubleshoot => "troubleshoot",
            Action::GenerateReports => "generate_reports",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ownership-scope tier controlling which resources' data a role may read.
/// `System` subsumes the rest by policy; the others are checked independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataAccessLevel {
    Own,
    Course,
    Department,
    System,
    None,
}

/// Module visibility for a role: everything, or an explicit set.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModuleScope {
    All,
    Specific(HashSet<String>),
}

impl ModuleScope {
    pub fn allows(&self, module: &str) -> bool {
        match self {
            ModuleScope::All => true,
            ModuleScope::Specific(modules) => modules.contains(module),
        }
    }
}

/// Immutable per-role permission bundle, fixed at engine construction.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PermissionSet {
    pub modules: ModuleScope,
    pub actions: HashSet<Action>,
    pub data_access_levels: HashSet<DataAccessLevel>,
    pub max_managed_resources: Option<u32>,
    pub can_delegate: bool,
}

/// Outcome of an action check: a boolean plus a human-readable reason a UI
/// can surface without exposing audit detail.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Decision {
    pub granted: bool,
    pub reason: String,
}

impl Decision {
    pub fn granted(reason: impl Into<String>) -> Self {
        Self {
            granted: true,
            reason: reason.into(),
        }
    }

    pub fn denied(reason: impl Into<String>) -> Self {
        Self {
            granted: false,
            reason: reason.into(),
        }
    }
}

/// Immutable record of one authorization decision. The role is captured at
/// decision time and never re-resolved.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AuditEntry {
    pub user_id: String,
    pub role: Role,
    pub module: String,
    pub action: Action,
    pub resource_id: Option<String>,
    pub timestamp: i64,
    pub granted: bool,
    pub reason: String,
}

/// Aggregate grant/deny figures over the retained trail.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct AccessStats {
    pub total: u64,
    pub granted_count: u64,
    pub denied_count: u64,
    /// Presentation-layer string: "0" when the trail is empty, otherwise the
    /// grant rate formatted to two decimal places.
    pub granted_percentage: String,
    pub denied_by_role: HashMap<String, u64>,
    pub denied_by_module: HashMap<String, u64>,
    pub denied_by_action: HashMap<String, u64>,
}

/// Read-only reporting snapshot: the full ordered trail plus its statistics.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct AuditExport {
    pub exported_at: i64,
    pub total_records: usize,
    pub records: Vec<AuditEntry>,
    pub stats: AccessStats,
}

/// Lifetime engine counters, independent of trail eviction.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct EngineReport {
    pub total_checks: u64,
    pub total_granted: u64,
    pub total_denied: u64,
    pub assigned_users: u64,
}
