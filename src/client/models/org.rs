//! Organization models

use serde::{Deserialize, Serialize};

/// Organization entity from `/v2/organizations`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrganizationEntity {
    /// Organization name
    pub name: String,

    /// Link to the quota definition assigned to the organization
    pub quota_definition_url: String,

    /// Link to the organization's spaces
    pub spaces_url: String,

    /// Organization status (`active`, `suspended`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Response of `/v2/organizations/:guid/memory_usage`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryUsage {
    pub memory_usage_in_mb: u64,
}
