//! Reusable formatting utilities for CLI output
//!
//! Memory sizes, ratios and percentages as they appear in report tables and
//! summary lines. Display only; nothing here feeds back into arithmetic.

pub const KILOBYTE: u64 = 1024;
pub const MEGABYTE: u64 = 1024 * KILOBYTE;
pub const GIGABYTE: u64 = 1024 * MEGABYTE;
pub const TERABYTE: u64 = 1024 * GIGABYTE;

/// Format a byte count with binary units.
///
/// One decimal place, dropped when it is `.0`. Zero is shown as `0M` so
/// memory columns stay in one unit.
///
/// # Example output
/// - `512M`
/// - `1.5G`
/// - `2T`
pub fn format_byte_size(bytes: u64) -> String {
    let (value, unit) = match bytes {
        0 => return "0M".to_string(),
        b if b >= TERABYTE => (b as f64 / TERABYTE as f64, "T"),
        b if b >= GIGABYTE => (b as f64 / GIGABYTE as f64, "G"),
        b if b >= MEGABYTE => (b as f64 / MEGABYTE as f64, "M"),
        b if b >= KILOBYTE => (b as f64 / KILOBYTE as f64, "K"),
        b => return format!("{}B", b),
    };

    let formatted = format!("{:.1}", value);
    let formatted = formatted.strip_suffix(".0").unwrap_or(&formatted);
    format!("{}{}", formatted, unit)
}

/// Format a megabyte figure, e.g. `1024` → `1G`.
pub fn format_megabytes(megabytes: u64) -> String {
    format_byte_size(megabytes.saturating_mul(MEGABYTE))
}

/// Format a percentage with two decimals, e.g. `51.2` → `51.20%`.
pub fn format_percent(percent: f64) -> String {
    format!("{:.2}%", percent)
}

/// Format a `running/total` pair.
pub fn format_ratio(running: u64, total: u64) -> String {
    format!("{}/{}", running, total)
}
