//! Common CLI types shared across commands

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Summary lines and aligned tables (default)
    #[default]
    Table,
    /// The computed report as JSON, for scripts
    Json,
}
