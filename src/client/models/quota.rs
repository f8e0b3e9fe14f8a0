//! Quota definition models

use serde::{Deserialize, Serialize};

/// Quota definition entity from `/v2/quota_definitions/:guid`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuotaDefinitionEntity {
    /// Quota name
    #[serde(default)]
    pub name: String,

    /// Memory limit in megabytes. `-1` means unlimited.
    pub memory_limit: i64,
}

impl QuotaDefinitionEntity {
    /// Memory limit as an unsigned megabyte figure.
    ///
    /// Unlimited (negative) limits collapse to 0, which the report renders as 0%.
    pub fn memory_limit_mb(&self) -> u64 {
        u64::try_from(self.memory_limit).unwrap_or(0)
    }
}
