//! Hierarchy fetching
//!
//! Walks organizations, their spaces and apps through the API traits and
//! returns fully populated [`Organization`] snapshots. The first failing
//! request aborts the walk; nothing is retried and nothing partial is
//! returned.

use indicatif::ProgressBar;
use log::debug;

use crate::client::CloudControllerApi;
use crate::client::models::{OrganizationEntity, Resource, SpaceEntity};
use crate::error::Result;
use crate::models::{App, Organization, Space};

/// Builds the org → space → app snapshot from the Cloud Controller.
pub struct HierarchyFetcher<'a, C: CloudControllerApi + ?Sized> {
    client: &'a C,
    progress: ProgressBar,
}

impl<'a, C: CloudControllerApi + ?Sized> HierarchyFetcher<'a, C> {
    /// Create a fetcher with no visible progress.
    pub fn new(client: &'a C) -> Self {
        Self {
            client,
            progress: ProgressBar::hidden(),
        }
    }

    /// Report progress messages on the given bar.
    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = progress;
        self
    }

    /// Fetch every organization, in the order the API lists them.
    pub async fn fetch_orgs(&self) -> Result<Vec<Organization>> {
        self.progress.set_message("Listing organizations");
        let raw_orgs = self.client.list_orgs().await?;
        debug!("Fetched {} organizations", raw_orgs.len());

        let count = raw_orgs.len();
        let mut orgs = Vec::with_capacity(count);
        for (index, raw) in raw_orgs.iter().enumerate() {
            self.progress.set_message(format!(
                "Fetching org {}/{}: {}",
                index + 1,
                count,
                raw.entity.name
            ));
            orgs.push(self.fetch_org(raw).await?);
        }

        Ok(orgs)
    }

    /// Fetch usage, quota and spaces of one organization.
    pub async fn fetch_org(&self, raw: &Resource<OrganizationEntity>) -> Result<Organization> {
        let memory_usage_mb = self.client.org_memory_usage(&raw.metadata.guid).await?;
        let memory_quota_mb = self
            .client
            .quota_memory_limit(&raw.entity.quota_definition_url)
            .await?;

        let raw_spaces = self.client.list_spaces(&raw.entity.spaces_url).await?;
        let mut spaces = Vec::with_capacity(raw_spaces.len());
        for raw_space in &raw_spaces {
            spaces.push(self.fetch_space(raw_space).await?);
        }

        debug!(
            "Org {}: {} spaces, usage {}MB, quota {}MB",
            raw.entity.name,
            spaces.len(),
            memory_usage_mb,
            memory_quota_mb
        );

        Ok(Organization {
            name: raw.entity.name.clone(),
            memory_quota_mb,
            memory_usage_mb,
            spaces,
        })
    }

    /// Fetch the apps of one space.
    pub async fn fetch_space(&self, raw: &Resource<SpaceEntity>) -> Result<Space> {
        let apps = self
            .client
            .list_apps(&raw.entity.apps_url)
            .await?
            .into_iter()
            .map(|a| App {
                ram_mb: a.entity.memory,
                instances: a.entity.instances,
                running: a.entity.is_running(),
            })
            .collect();

        Ok(Space {
            name: raw.entity.name.clone(),
            apps,
        })
    }
}
