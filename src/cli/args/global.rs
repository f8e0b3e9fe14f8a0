//! Global CLI options shared across all commands

use crate::cli::{Cli, OutputFormat};
use crate::config::SessionOverrides;

/// Global CLI options passed to all command handlers.
///
/// Precedence for connection settings: CLI flag > environment variable >
/// config file session.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Output format (table, json)
    pub format: OutputFormat,

    /// Session name override (bypasses default_session in config)
    pub session: Option<String>,

    /// Custom config file path (defaults to ~/.usage-report/config.yaml)
    pub config: Option<String>,

    /// API endpoint override
    pub api_endpoint: Option<String>,

    /// Access token override
    pub access_token: Option<String>,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            session: cli.session.clone(),
            config: cli.config.clone(),
            api_endpoint: cli.api_endpoint.clone(),
            access_token: cli.access_token.clone(),
        }
    }

    /// Get session override as `Option<&str>`.
    pub fn session_ref(&self) -> Option<&str> {
        self.session.as_deref()
    }

    /// Get config path as `Option<&str>`.
    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }

    /// Connection overrides to apply on top of the config session.
    pub fn overrides(&self) -> SessionOverrides {
        SessionOverrides {
            api_endpoint: self.api_endpoint.clone(),
            access_token: self.access_token.clone(),
        }
    }
}
