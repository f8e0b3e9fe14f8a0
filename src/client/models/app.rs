//! Application models

use serde::{Deserialize, Serialize};

/// Desired state of an app
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AppState {
    Started,
    Stopped,
    #[serde(other)]
    Unknown,
}

/// App entity from `/v2/spaces/:guid/apps`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppEntity {
    /// App name
    #[serde(default)]
    pub name: String,

    /// Memory per instance in megabytes
    pub memory: u64,

    /// Desired instance count
    pub instances: u64,

    /// Desired state
    pub state: AppState,
}

impl AppEntity {
    /// Whether the app is started.
    pub fn is_running(&self) -> bool {
        self.state == AppState::Started
    }
}
