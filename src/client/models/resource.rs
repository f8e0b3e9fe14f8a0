//! Resource envelope shared by every v2 endpoint

use serde::{Deserialize, Serialize};

/// Resource metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceMetadata {
    /// Resource GUID
    pub guid: String,

    /// Self link (relative to the API endpoint)
    #[serde(default)]
    pub url: String,
}

/// A single v2 resource
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource<T> {
    pub metadata: ResourceMetadata,
    pub entity: T,
}
