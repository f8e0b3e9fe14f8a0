//! Listing API trait for collection operations

use async_trait::async_trait;

use crate::client::models::{AppEntity, OrganizationEntity, Resource, SpaceEntity};
use crate::error::Result;

/// Collection listing operations for the Cloud Controller v2 API
///
/// Each method returns every resource of the collection; implementations
/// follow pagination internally.
#[async_trait]
pub trait ListingApi: Send + Sync {
    /// List all organizations visible to the session
    async fn list_orgs(&self) -> Result<Vec<Resource<OrganizationEntity>>>;

    /// List all spaces behind an organization's `spaces_url`
    async fn list_spaces(&self, spaces_url: &str) -> Result<Vec<Resource<SpaceEntity>>>;

    /// List all apps behind a space's `apps_url`
    async fn list_apps(&self, apps_url: &str) -> Result<Vec<Resource<AppEntity>>>;
}
