//! Usage API trait for quota and memory figures

use async_trait::async_trait;

use crate::error::Result;

/// Memory usage and quota lookups for the Cloud Controller v2 API
#[async_trait]
pub trait UsageApi: Send + Sync {
    /// Current memory usage of an organization in megabytes
    async fn org_memory_usage(&self, org_guid: &str) -> Result<u64>;

    /// Memory limit in megabytes of the quota definition at `quota_url`
    async fn quota_memory_limit(&self, quota_url: &str) -> Result<u64>;
}
