//! Mock Cloud Controller client for testing
//!
//! Provides a mock implementation of the API traits for unit testing
//! without making real API calls.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::api::{ListingApi, UsageApi};
use super::models::{AppEntity, OrganizationEntity, Resource, SpaceEntity};
use crate::error::{ApiError, Result};

/// Mock API client for testing.
///
/// Configure responses via builder methods; lookups for links that were
/// never configured fail with `ApiError::NotFound`.
///
/// # Example
/// ```ignore
/// let mock = MockCloudController::new()
///     .with_orgs(vec![org_resource("o1", "org1")])
///     .with_quota("/v2/quota_definitions/o1-quota", 1000);
/// ```
#[derive(Default)]
pub struct MockCloudController {
    /// Organizations to return from list_orgs
    orgs: Vec<Resource<OrganizationEntity>>,
    /// Spaces keyed by spaces_url
    spaces: HashMap<String, Vec<Resource<SpaceEntity>>>,
    /// Apps keyed by apps_url
    apps: HashMap<String, Vec<Resource<AppEntity>>>,
    /// Memory usage keyed by org GUID
    usage: HashMap<String, u64>,
    /// Memory limits keyed by quota URL
    quotas: HashMap<String, u64>,
    /// Fail any request whose link contains this fragment
    fail_on: Option<String>,
    /// Track number of calls for verification
    call_count: Arc<Mutex<CallCounts>>,
}

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub list_orgs: usize,
    pub list_spaces: usize,
    pub list_apps: usize,
    pub org_memory_usage: usize,
    pub quota_memory_limit: usize,
}

impl MockCloudController {
    /// Create a new mock client with empty responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set organizations to return.
    pub fn with_orgs(mut self, orgs: Vec<Resource<OrganizationEntity>>) -> Self {
        self.orgs = orgs;
        self
    }

    /// Set spaces returned for a spaces_url.
    pub fn with_spaces(
        mut self,
        spaces_url: impl Into<String>,
        spaces: Vec<Resource<SpaceEntity>>,
    ) -> Self {
        self.spaces.insert(spaces_url.into(), spaces);
        self
    }

    /// Set apps returned for an apps_url.
    pub fn with_apps(
        mut self,
        apps_url: impl Into<String>,
        apps: Vec<Resource<AppEntity>>,
    ) -> Self {
        self.apps.insert(apps_url.into(), apps);
        self
    }

    /// Set memory usage for an org GUID.
    pub fn with_usage(mut self, org_guid: impl Into<String>, usage_mb: u64) -> Self {
        self.usage.insert(org_guid.into(), usage_mb);
        self
    }

    /// Set the memory limit behind a quota URL.
    pub fn with_quota(mut self, quota_url: impl Into<String>, limit_mb: u64) -> Self {
        self.quotas.insert(quota_url.into(), limit_mb);
        self
    }

    /// Make every request touching `fragment` fail with a server error.
    pub fn failing_on(mut self, fragment: impl Into<String>) -> Self {
        self.fail_on = Some(fragment.into());
        self
    }

    /// Get call counts for verification.
    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    fn check_failure(&self, link: &str) -> Result<()> {
        match self.fail_on {
            Some(ref fragment) if link.contains(fragment.as_str()) => {
                Err(ApiError::ServerError(format!("mock failure for {}", link)).into())
            }
            _ => Ok(()),
        }
    }
}

fn lookup<T: Clone>(map: &HashMap<String, T>, key: &str) -> Result<T> {
    map.get(key)
        .cloned()
        .ok_or_else(|| ApiError::NotFound(key.to_string()).into())
}

#[async_trait]
impl ListingApi for MockCloudController {
    async fn list_orgs(&self) -> Result<Vec<Resource<OrganizationEntity>>> {
        self.call_count.lock().await.list_orgs += 1;
        self.check_failure("/v2/organizations")?;
        Ok(self.orgs.clone())
    }

    async fn list_spaces(&self, spaces_url: &str) -> Result<Vec<Resource<SpaceEntity>>> {
        self.call_count.lock().await.list_spaces += 1;
        self.check_failure(spaces_url)?;
        lookup(&self.spaces, spaces_url)
    }

    async fn list_apps(&self, apps_url: &str) -> Result<Vec<Resource<AppEntity>>> {
        self.call_count.lock().await.list_apps += 1;
        self.check_failure(apps_url)?;
        lookup(&self.apps, apps_url)
    }
}

#[async_trait]
impl UsageApi for MockCloudController {
    async fn org_memory_usage(&self, org_guid: &str) -> Result<u64> {
        self.call_count.lock().await.org_memory_usage += 1;
        self.check_failure(org_guid)?;
        lookup(&self.usage, org_guid)
    }

    async fn quota_memory_limit(&self, quota_url: &str) -> Result<u64> {
        self.call_count.lock().await.quota_memory_limit += 1;
        self.check_failure(quota_url)?;
        lookup(&self.quotas, quota_url)
    }
}
