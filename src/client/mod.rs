//! Cloud Controller API client

pub mod api;
pub mod cloud_controller;
#[cfg(test)]
pub mod fixtures;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod pagination;
pub mod parallel;

pub use api::{ListingApi, UsageApi};
pub use cloud_controller::CloudControllerClient;
#[cfg(test)]
pub use mock::MockCloudController;
pub use pagination::MAX_PAGE_SIZE;

/// Everything the usage report needs from the platform.
///
/// Blanket-implemented for any type providing both sub-traits.
pub trait CloudControllerApi: ListingApi + UsageApi {}

impl<T: ListingApi + UsageApi> CloudControllerApi for T {}
