//! Usage aggregation
//!
//! Pure functions turning an [`Organization`] snapshot into ordered usage
//! rows. Space rows and the org `Total` row all use the organization's quota
//! as denominator. A zero quota yields 0% everywhere instead of dividing by
//! zero.
//!
//! ```text
//! compute_report(orgs)
//!     └── compute_org_report(org)        (orgs kept in fetch order)
//!             ├── compute_space_row(..)  (spaces sorted by name)
//!             └── Total row              (sum of the space rows)
//! ```

use serde::Serialize;

use crate::models::{Organization, Space};
use crate::output::formatters::{format_megabytes, format_percent};

pub mod fetch;
pub mod render;

pub use fetch::HierarchyFetcher;

/// Label of the synthetic per-organization sum row.
pub const TOTAL_ROW_NAME: &str = "Total";

/// Usage figures for one space, or the sum over an organization.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UsageRow {
    pub name: String,
    pub running_apps: u64,
    pub total_apps: u64,
    pub running_instances: u64,
    pub total_instances: u64,
    /// Memory of running apps (MB)
    pub running_memory_mb: u64,
    /// `running_memory_mb` against the org quota, in percent
    pub quota_percent: f64,
}

/// Computed report for one organization.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrgReport {
    pub name: String,
    pub memory_usage_mb: u64,
    pub memory_quota_mb: u64,
    /// Platform-reported usage against the quota, in percent
    pub quota_percent: f64,
    /// One row per space, sorted by name
    pub spaces: Vec<UsageRow>,
    pub total: UsageRow,
}

/// Computed report over all organizations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UsageReport {
    /// Organizations in fetch order
    pub orgs: Vec<OrgReport>,
    pub total_orgs: usize,
    pub total_spaces: usize,
}

/// `100 × memory / quota`, or 0 when the quota is 0.
pub fn quota_percent(memory_mb: u64, quota_mb: u64) -> f64 {
    if quota_mb == 0 {
        return 0.0;
    }
    100.0 * memory_mb as f64 / quota_mb as f64
}

/// Compute the usage row of a single space.
pub fn compute_space_row(space: &Space, org_quota_mb: u64) -> UsageRow {
    let mut row = UsageRow {
        name: space.name.clone(),
        running_apps: 0,
        total_apps: space.apps.len() as u64,
        running_instances: 0,
        total_instances: 0,
        running_memory_mb: 0,
        quota_percent: 0.0,
    };

    for app in &space.apps {
        if app.running {
            row.running_memory_mb = row.running_memory_mb.saturating_add(app.memory_mb());
            row.running_instances = row.running_instances.saturating_add(app.instances);
            row.running_apps += 1;
        }
        row.total_instances = row.total_instances.saturating_add(app.instances);
    }

    row.quota_percent = quota_percent(row.running_memory_mb, org_quota_mb);
    row
}

/// Sum space rows into the organization's `Total` row.
fn total_row(rows: &[UsageRow], org_quota_mb: u64) -> UsageRow {
    let mut total = UsageRow {
        name: TOTAL_ROW_NAME.to_string(),
        running_apps: 0,
        total_apps: 0,
        running_instances: 0,
        total_instances: 0,
        running_memory_mb: 0,
        quota_percent: 0.0,
    };

    for row in rows {
        total.running_apps += row.running_apps;
        total.total_apps += row.total_apps;
        total.running_instances = total.running_instances.saturating_add(row.running_instances);
        total.total_instances = total.total_instances.saturating_add(row.total_instances);
        total.running_memory_mb = total.running_memory_mb.saturating_add(row.running_memory_mb);
    }

    total.quota_percent = quota_percent(total.running_memory_mb, org_quota_mb);
    total
}

/// Compute the space rows, total row and summary figures of an organization.
pub fn compute_org_report(org: &Organization) -> OrgReport {
    let mut spaces: Vec<&Space> = org.spaces.iter().collect();
    // Stable, byte-wise (case-sensitive) ordering
    spaces.sort_by(|a, b| a.name.cmp(&b.name));

    let rows: Vec<UsageRow> = spaces
        .into_iter()
        .map(|space| compute_space_row(space, org.memory_quota_mb))
        .collect();
    let total = total_row(&rows, org.memory_quota_mb);

    OrgReport {
        name: org.name.clone(),
        memory_usage_mb: org.memory_usage_mb,
        memory_quota_mb: org.memory_quota_mb,
        quota_percent: quota_percent(org.memory_usage_mb, org.memory_quota_mb),
        spaces: rows,
        total,
    }
}

/// Compute the report for every organization, keeping their order.
pub fn compute_report(orgs: &[Organization]) -> UsageReport {
    let orgs: Vec<OrgReport> = orgs.iter().map(compute_org_report).collect();
    let total_spaces = orgs.iter().map(|o| o.spaces.len()).sum();

    UsageReport {
        total_orgs: orgs.len(),
        total_spaces,
        orgs,
    }
}

impl OrgReport {
    /// Number of spaces in the organization.
    pub fn space_count(&self) -> usize {
        self.spaces.len()
    }

    /// Space rows followed by the `Total` row.
    pub fn rows(&self) -> impl Iterator<Item = &UsageRow> {
        self.spaces.iter().chain(std::iter::once(&self.total))
    }

    /// e.g. `Org org1 is consuming 512M of 1000M (51.20%) in 2 spaces.`
    pub fn summary_line(&self) -> String {
        format!(
            "Org {} is consuming {} of {} ({}) in {} spaces.",
            self.name,
            format_megabytes(self.memory_usage_mb),
            format_megabytes(self.memory_quota_mb),
            format_percent(self.quota_percent),
            self.space_count()
        )
    }
}

impl UsageReport {
    /// Line printed before the first organization.
    pub fn header_line(&self) -> String {
        format!("Gathering usage information for {} orgs", self.total_orgs)
    }

    /// Line printed after the last organization.
    pub fn trailer_line(&self) -> String {
        format!(
            "Total orgs: {}, Total spaces: {}",
            self.total_orgs, self.total_spaces
        )
    }
}
