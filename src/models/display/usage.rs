//! Usage row display model

use serde::Serialize;
use tabled::Tabled;

use crate::output::formatters::{format_megabytes, format_percent, format_ratio};
use crate::report::UsageRow;

/// One rendered line of an organization's usage table.
#[derive(Debug, Clone, PartialEq, Eq, Tabled, Serialize)]
pub struct UsageRowDisplay {
    /// Space name, or `Total`
    #[tabled(rename = "name")]
    pub name: String,

    /// `running/total` apps
    #[tabled(rename = "apps")]
    pub apps: String,

    /// `running/total` instances
    #[tabled(rename = "instances")]
    pub instances: String,

    /// Running memory
    #[tabled(rename = "memory")]
    pub memory: String,

    /// Running memory as a share of the org quota
    #[tabled(rename = "mem%quota")]
    pub quota_percent: String,
}

impl From<&UsageRow> for UsageRowDisplay {
    fn from(row: &UsageRow) -> Self {
        Self {
            name: row.name.clone(),
            apps: format_ratio(row.running_apps, row.total_apps),
            instances: format_ratio(row.running_instances, row.total_instances),
            memory: format_megabytes(row.running_memory_mb),
            quota_percent: format_percent(row.quota_percent),
        }
    }
}
