//! Configuration management for the usage report
//!
//! The config file holds named sessions. A session is everything needed to
//! reach one Cloud Controller: its API endpoint and an access token.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::client::MAX_PAGE_SIZE;
use crate::error::{ConfigError, Result};

/// Name given to a session assembled purely from overrides.
pub const OVERRIDE_SESSION_NAME: &str = "environment";

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Session used when `--session` is not given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_session: Option<String>,

    /// Named sessions
    #[serde(default)]
    pub sessions: BTreeMap<String, SessionConfig>,
}

/// One named session as written in the config file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Cloud Controller API endpoint, e.g. `https://api.sys.example.com`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_endpoint: Option<String>,

    /// OAuth access token (with or without the `bearer ` prefix)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,

    /// Page size for listing requests
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results_per_page: Option<usize>,
}

/// Values that replace the resolved session's settings (CLI flags or env).
#[derive(Debug, Clone, Default)]
pub struct SessionOverrides {
    pub api_endpoint: Option<String>,
    pub access_token: Option<String>,
}

impl SessionOverrides {
    /// Both connection values are present, so no config entry is required.
    pub fn is_complete(&self) -> bool {
        self.api_endpoint.is_some() && self.access_token.is_some()
    }
}

/// A fully resolved, validated session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub name: String,
    pub api_endpoint: String,
    pub access_token: String,
    pub results_per_page: usize,
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".usage-report").join("config.yaml"))
    }

    /// Resolve the config path, preferring an explicit override.
    pub fn resolve_path(path: Option<&str>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(PathBuf::from(p)),
            None => Self::default_path(),
        }
    }

    /// Load configuration from an optional override path
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        Self::load_from(Self::resolve_path(path)?)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()).into());
        }

        let contents = std::fs::read_to_string(&path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from YAML text
    pub fn parse(contents: &str) -> Result<Self> {
        // An empty file deserializes to unit, not to a map
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Config = serde_yaml::from_str(contents).map_err(ConfigError::from)?;
        Ok(config)
    }

    /// Pick the session name to use.
    ///
    /// Precedence: explicit request > `default_session` > the only session.
    pub fn selected_session_name<'a>(&'a self, requested: Option<&'a str>) -> Option<&'a str> {
        if let Some(name) = requested {
            return Some(name);
        }
        if let Some(ref name) = self.default_session {
            return Some(name.as_str());
        }
        if self.sessions.len() == 1 {
            return self.sessions.keys().next().map(String::as_str);
        }
        None
    }

    /// Resolve and validate the session for a report run.
    pub fn session(
        &self,
        requested: Option<&str>,
        overrides: &SessionOverrides,
    ) -> Result<Session> {
        let (name, base) = match self.selected_session_name(requested) {
            Some(name) => {
                let base = self
                    .sessions
                    .get(name)
                    .cloned()
                    .ok_or_else(|| ConfigError::SessionNotFound(name.to_string()))?;
                (name.to_string(), base)
            }
            None if overrides.is_complete() => {
                (OVERRIDE_SESSION_NAME.to_string(), SessionConfig::default())
            }
            None => return Err(ConfigError::NoSessionSelected.into()),
        };

        base.resolve(name, overrides)
    }
}

impl SessionConfig {
    /// Apply overrides and check that the connection values are usable.
    pub fn resolve(self, name: String, overrides: &SessionOverrides) -> Result<Session> {
        let api_endpoint = overrides
            .api_endpoint
            .clone()
            .or(self.api_endpoint)
            .map(|e| e.trim().trim_end_matches('/').to_string())
            .filter(|e| !e.is_empty())
            .ok_or(ConfigError::MissingApiEndpoint)?;

        if !api_endpoint.starts_with("http://") && !api_endpoint.starts_with("https://") {
            return Err(ConfigError::Invalid(format!(
                "api_endpoint must start with http:// or https:// (got '{}')",
                api_endpoint
            ))
            .into());
        }

        let access_token = overrides
            .access_token
            .clone()
            .or(self.access_token)
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or(ConfigError::MissingAccessToken)?;

        let results_per_page = self
            .results_per_page
            .unwrap_or(MAX_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE);

        Ok(Session {
            name,
            api_endpoint,
            access_token,
            results_per_page,
        })
    }
}
