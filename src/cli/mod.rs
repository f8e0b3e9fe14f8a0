//! CLI command definitions and handlers

use clap::{Parser, Subcommand};

pub mod args;
pub mod context;
pub mod report;
pub mod status;

pub use args::{GlobalOptions, OutputFormat};
pub use context::CommandContext;

/// Memory and instance usage report for Cloud Foundry organizations and spaces
#[derive(Parser, Debug)]
#[command(name = "usage-report")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute (defaults to `report`)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output format (table, json)
    #[arg(
        long,
        global = true,
        env = "USAGE_REPORT_FORMAT",
        default_value = "table",
        hide_env = true
    )]
    pub format: OutputFormat,

    /// Named session from the config file
    #[arg(long, short = 's', global = true, env = "USAGE_REPORT_SESSION", hide_env = true)]
    pub session: Option<String>,

    /// Override config file location
    #[arg(long, global = true, env = "USAGE_REPORT_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Override the session's Cloud Controller API endpoint
    #[arg(long, global = true, env = "USAGE_REPORT_API_ENDPOINT", hide_env = true)]
    pub api_endpoint: Option<String>,

    /// Override the session's access token
    #[arg(
        long,
        global = true,
        env = "USAGE_REPORT_ACCESS_TOKEN",
        hide_env = true,
        hide_env_values = true
    )]
    pub access_token: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "USAGE_REPORT_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Report memory and instance usage for all orgs and spaces
    #[command(alias = "usage-report")]
    Report,

    /// Show which session and endpoint a report would use
    Status,
}

impl Cli {
    /// The command to run, `report` when none was given.
    pub fn command(&self) -> Commands {
        self.command.unwrap_or(Commands::Report)
    }
}
