//! Command execution context
//!
//! Resolves the session and builds the API client once, so command handlers
//! receive everything as explicit values.

use log::debug;

use crate::cli::{GlobalOptions, OutputFormat};
use crate::client::CloudControllerClient;
use crate::config::{Config, Session};
use crate::error::{ConfigError, Error, Result};

/// Context for command execution containing the session, client, and runtime options.
pub struct CommandContext {
    /// Resolved and validated session
    pub session: Session,
    /// API client bound to the session
    pub client: CloudControllerClient,
    /// Output format preference
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// Fails before any request is made when no usable session exists.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let session = resolve_session(opts)?;
        debug!(
            "Using session '{}' at {} ({} results per page)",
            session.name, session.api_endpoint, session.results_per_page
        );

        let client = CloudControllerClient::new(&session)?;

        Ok(Self {
            session,
            client,
            format: opts.format,
        })
    }
}

/// Load the config and resolve the session selected by the global options.
///
/// A missing config file is tolerated when the overrides alone describe a
/// complete connection.
pub fn resolve_session(opts: &GlobalOptions) -> Result<Session> {
    let overrides = opts.overrides();

    let config = match Config::load_at(opts.config_ref()) {
        Ok(config) => config,
        Err(Error::Config(ConfigError::NotFound(path))) if overrides.is_complete() => {
            debug!("No config at {}, using overrides only", path);
            Config::default()
        }
        Err(err) => return Err(err),
    };

    config.session(opts.session_ref(), &overrides)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn opts(config: Option<String>) -> GlobalOptions {
        GlobalOptions {
            format: OutputFormat::Table,
            session: None,
            config,
            api_endpoint: None,
            access_token: None,
        }
    }

    #[test]
    fn test_resolve_session_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "sessions:\n  prod:\n    api_endpoint: https://api.example.com\n    access_token: t"
        )
        .unwrap();

        let session =
            resolve_session(&opts(Some(file.path().display().to_string()))).unwrap();

        assert_eq!(session.name, "prod");
        assert_eq!(session.api_endpoint, "https://api.example.com");
    }

    #[test]
    fn test_missing_config_without_overrides() {
        let err = resolve_session(&opts(Some("/no/such/config.yaml".to_string()))).unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_missing_config_with_complete_overrides() {
        let mut o = opts(Some("/no/such/config.yaml".to_string()));
        o.api_endpoint = Some("http://localhost:9022".to_string());
        o.access_token = Some("token".to_string());

        let session = resolve_session(&o).unwrap();

        assert_eq!(session.api_endpoint, "http://localhost:9022");
        assert_eq!(session.access_token, "token");
    }

    #[test]
    fn test_context_builds_client() {
        let mut o = opts(Some("/no/such/config.yaml".to_string()));
        o.api_endpoint = Some("http://localhost:9022".to_string());
        o.access_token = Some("token".to_string());
        o.format = OutputFormat::Json;

        let ctx = CommandContext::new(&o).unwrap();

        assert_eq!(ctx.format, OutputFormat::Json);
        assert_eq!(ctx.session.name, crate::config::OVERRIDE_SESSION_NAME);
    }
}
