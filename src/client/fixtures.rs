//! Test fixtures and builders for API model types
//!
//! Import via `use crate::client::fixtures::*` in test modules.

use super::models::{
    AppEntity, AppState, OrganizationEntity, Resource, ResourceMetadata, SpaceEntity,
};

/// Wrap an entity in a resource envelope.
pub fn resource<T>(guid: &str, url: String, entity: T) -> Resource<T> {
    Resource {
        metadata: ResourceMetadata {
            guid: guid.to_string(),
            url,
        },
        entity,
    }
}

/// Organization resource whose links are derived from its GUID.
///
/// Quota URL: `/v2/quota_definitions/<guid>-quota`.
pub fn org_resource(guid: &str, name: &str) -> Resource<OrganizationEntity> {
    resource(
        guid,
        format!("/v2/organizations/{}", guid),
        OrganizationEntity {
            name: name.to_string(),
            quota_definition_url: format!("/v2/quota_definitions/{}-quota", guid),
            spaces_url: format!("/v2/organizations/{}/spaces", guid),
            status: Some("active".to_string()),
        },
    )
}

/// Space resource whose apps link is derived from its GUID.
pub fn space_resource(guid: &str, name: &str) -> Resource<SpaceEntity> {
    resource(
        guid,
        format!("/v2/spaces/{}", guid),
        SpaceEntity {
            name: name.to_string(),
            apps_url: format!("/v2/spaces/{}/apps", guid),
        },
    )
}

// ============================================================================
// AppBuilder
// ============================================================================

/// Builder for creating test app resources.
///
/// # Example
/// ```ignore
/// let app = AppBuilder::new("web").memory(256).instances(2).started().build();
/// ```
#[derive(Debug, Clone)]
pub struct AppBuilder {
    name: String,
    memory: u64,
    instances: u64,
    state: AppState,
}

impl AppBuilder {
    /// Create a stopped single-instance app with 128M.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            memory: 128,
            instances: 1,
            state: AppState::Stopped,
        }
    }

    /// Set memory per instance (MB).
    pub fn memory(mut self, memory: u64) -> Self {
        self.memory = memory;
        self
    }

    /// Set the instance count.
    pub fn instances(mut self, instances: u64) -> Self {
        self.instances = instances;
        self
    }

    /// Mark the app as started.
    pub fn started(mut self) -> Self {
        self.state = AppState::Started;
        self
    }

    /// Build the resource.
    pub fn build(self) -> Resource<AppEntity> {
        let guid = format!("{}-guid", self.name);
        resource(
            &guid,
            format!("/v2/apps/{}", guid),
            AppEntity {
                name: self.name,
                memory: self.memory,
                instances: self.instances,
                state: self.state,
            },
        )
    }
}
