//! Service configuration.
//!
//! Loaded once at startup: defaults, then an optional JSON file named by
//! `TRIAGE_AI_CONFIG`, then individual environment overrides.

use crate::error::{Result, TriageAiError};
use crate::triage::config::TriageConfig;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;
use std::str::FromStr;

/// Path of an optional JSON config file.
pub const CONFIG_PATH_ENV: &str = "TRIAGE_AI_CONFIG";
/// Overrides `server.bind_addr`.
pub const BIND_ENV: &str = "TRIAGE_AI_BIND";
/// Overrides `logging.format` (`text` or `json`).
pub const LOG_FORMAT_ENV: &str = "TRIAGE_AI_LOG_FORMAT";

/// Address the clinic back end calls by default.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8001";

/// Top-level configuration for the service binary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub triage: TriageConfig,
}

impl ServiceConfig {
    /// Parse and validate a JSON document. Missing fields take defaults.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// Load from the process environment.
    pub fn load() -> Result<Self> {
        Self::load_with(|key| std::env::var(key).ok())
    }

    /// Load using `lookup` in place of the process environment.
    pub fn load_with<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match lookup(CONFIG_PATH_ENV) {
            Some(path) => Self::from_json_file(path)?,
            None => Self::default(),
        };
        if let Some(addr) = lookup(BIND_ENV) {
            config.server.bind_addr = addr;
        }
        if let Some(format) = lookup(LOG_FORMAT_ENV) {
            config.logging.format = format.parse()?;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.server.socket_addr()?;
        self.triage.validate()
    }
}

/// HTTP listener configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address to bind (default: 127.0.0.1:8001).
    pub bind_addr: String,
    /// Allow cross-origin requests from any origin (default: true).
    pub permissive_cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            permissive_cors: true,
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.bind_addr
            .parse()
            .map_err(|e: std::net::AddrParseError| TriageAiError::InvalidAddress {
                addr: self.bind_addr.clone(),
                message: e.to_string(),
            })
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = TriageAiError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(TriageAiError::InvalidConfig(format!(
                "unknown log format {other:?}, expected \"text\" or \"json\""
            ))),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub format: LogFormat,
    /// Filter used when `RUST_LOG` is unset (default: "info").
    pub default_filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::Text,
            default_filter: "info".to_string(),
        }
    }
}
