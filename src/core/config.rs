//! Configuration management for the tool server.
//!
//! This module provides a centralized configuration structure populated
//! from defaults, an optional `.env` file, and environment variables.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::info;

use super::error::{Error, Result};
use super::transport::HttpConfig;

/// Main configuration structure for the tool server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// HTTP transport configuration.
    pub transport: HttpConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as shown in logs.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "opal-tool-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            transport: HttpConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// The listening port comes from `PORT`; everything else is prefixed
    /// with `TOOL_SERVER_`, e.g. `TOOL_SERVER_HOST`, `TOOL_SERVER_LOG_LEVEL`.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("TOOL_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("TOOL_SERVER_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Some(with_timestamps) = parse_flag("TOOL_SERVER_LOG_TIMESTAMPS") {
            config.logging.with_timestamps = with_timestamps;
        }

        if let Some(port) = parse_var("PORT")? {
            config.transport.port = port;
        }

        if let Ok(host) = std::env::var("TOOL_SERVER_HOST") {
            config.transport.host = host;
        }

        if let Some(enable_cors) = parse_flag("TOOL_SERVER_CORS") {
            config.transport.enable_cors = enable_cors;
            info!("CORS enabled: {}", enable_cors);
        }

        if let Some(body_limit) = parse_var("TOOL_SERVER_BODY_LIMIT")? {
            config.transport.body_limit = body_limit;
        }

        Ok(config)
    }
}

/// Parse an optional environment variable, failing on unparseable values.
fn parse_var<T: FromStr>(key: &str) -> Result<Option<T>> {
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| Error::config(format!("{key} has an invalid value: {raw:?}"))),
        Err(_) => Ok(None),
    }
}

/// Parse a boolean flag where anything but `false`/`0` counts as enabled.
fn parse_flag(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .map(|v| v.to_lowercase() != "false" && v != "0")
}
