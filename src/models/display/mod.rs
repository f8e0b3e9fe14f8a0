//! Display model implementations for table output
//!
//! Display models transform computed report rows into CLI-friendly formats
//! with the report's column names.

mod usage;

pub use usage::UsageRowDisplay;
