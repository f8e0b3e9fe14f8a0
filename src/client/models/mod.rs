//! Cloud Controller v2 API data models
//!
//! Every v2 resource arrives as a `{ metadata, entity }` pair. The entity
//! types here keep only the fields the usage report reads.

mod app;
mod org;
mod quota;
mod resource;
mod space;

pub use app::{AppEntity, AppState};
pub use org::{MemoryUsage, OrganizationEntity};
pub use quota::QuotaDefinitionEntity;
pub use resource::{Resource, ResourceMetadata};
pub use space::SpaceEntity;
