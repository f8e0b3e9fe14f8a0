//! API trait definitions split by responsibility
//!
//! - [`ListingApi`] - paginated organization, space and app listings
//! - [`UsageApi`] - per-organization memory usage and quota lookups
//!
//! The [`CloudControllerApi`](super::CloudControllerApi) super-trait combines both.

mod listing;
mod usage;

pub use listing::ListingApi;
pub use usage::UsageApi;
