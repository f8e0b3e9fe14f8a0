//! Space models

use serde::{Deserialize, Serialize};

/// Space entity from `/v2/organizations/:guid/spaces`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpaceEntity {
    /// Space name
    pub name: String,

    /// Link to the space's apps
    pub apps_url: String,
}
