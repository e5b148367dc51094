use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Global configuration for the Meridian platform services.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlatformConfig {
    /// Access-control layer configuration
    pub access: AccessConfig,
}

impl PlatformConfig {
    pub fn validate(&self) -> CoreResult<()> {
        self.access.validate()
    }
}

/// Configuration for the access-control layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessConfig {
    /// Maximum number of retained audit entries; oldest are evicted first
    pub max_audit_entries: usize,
    /// Whether data-access checks are recorded in the audit trail
    pub audit_data_access: bool,
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            max_audit_entries: crate::DEFAULT_MAX_AUDIT_ENTRIES,
            audit_data_access: true,
        }
    }
}

impl AccessConfig {
    /// Capacity faults are rejected here, at initialization, never during an
    /// append.
    pub fn validate(&self) -> CoreResult<()> {
        if self.max_audit_entries == 0 {
            return Err(CoreError::InvalidCapacity(self.max_audit_entries));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_valid() {
        assert!(PlatformConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let config = AccessConfig {
            max_audit_entries: 0,
            ..AccessConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(CoreError::InvalidCapacity(0))
        ));
    }
}
