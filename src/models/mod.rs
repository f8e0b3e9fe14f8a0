//! Domain and display models
//!
//! `hierarchy` holds the immutable org → space → app snapshot the report is
//! computed from. `display` turns computed rows into table rows.

pub mod display;
pub mod hierarchy;

pub use display::UsageRowDisplay;
pub use hierarchy::{App, Organization, Space};
