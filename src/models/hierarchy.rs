//! Organization → space → app snapshot
//!
//! Fully populated by the fetcher before aggregation starts and never
//! mutated afterwards. All memory figures are megabytes.

/// Organization with its quota, reported usage and spaces
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Organization {
    /// Organization name
    pub name: String,

    /// Memory quota (MB); 0 for unlimited or unset quotas
    pub memory_quota_mb: u64,

    /// Memory usage reported by the platform (MB)
    pub memory_usage_mb: u64,

    /// Spaces in fetch order
    pub spaces: Vec<Space>,
}

/// Space and its apps
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Space {
    pub name: String,
    pub apps: Vec<App>,
}

/// Deployed app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct App {
    /// Memory per instance (MB)
    pub ram_mb: u64,

    /// Declared instance count
    pub instances: u64,

    /// Whether the app is started
    pub running: bool,
}

impl App {
    /// Memory held by the app while running: `instances × ram`, saturating.
    pub fn memory_mb(&self) -> u64 {
        self.instances.saturating_mul(self.ram_mb)
    }
}
